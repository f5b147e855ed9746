//! Dashboard Discord command - overdue and upcoming maintenance across all your cars.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData,
            commands::utils::{self, format_date},
        },
        core::dashboard::{self, MaintenanceAlert},
        errors::{Error, Result},
    };
    use std::fmt::Write;

    /// Discord rejects embed field values above 1024 characters
    const FIELD_LIMIT: usize = 1024;
    /// Alerts shown per section
    const ALERT_LIMIT: usize = 10;
    /// Room kept free for the "and N more" line
    const FOOTER_RESERVE: usize = 32;

    fn render_alerts(alerts: &[MaintenanceAlert]) -> Result<String> {
        let mut value = String::new();
        let mut written = 0;
        for alert in alerts.iter().take(ALERT_LIMIT) {
            let mut line = String::new();
            write!(
                &mut line,
                "{} **{}** - {}",
                alert.assessment.status.emoji(),
                alert.type_name(),
                alert.car.label()
            )?;
            if let Some(date) = alert.record.next_service_date {
                write!(&mut line, " ({})", format_date(date))?;
            }
            writeln!(&mut line, "\n{}", alert.assessment.remaining_text())?;

            if value.len() + line.len() + FOOTER_RESERVE > FIELD_LIMIT {
                break;
            }
            value.push_str(&line);
            written += 1;
        }
        if written < alerts.len() {
            write!(&mut value, "_... e mais {}_", alerts.len() - written)?;
        }
        Ok(value)
    }

    /// Shows overdue and upcoming maintenance for all of your cars.
    #[poise::command(slash_command, prefix_command)]
    pub async fn dashboard(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        use poise::serenity_prelude as serenity;

        let db = &ctx.data().database;
        let owner_id = ctx.author().id.to_string();
        let today = utils::today();

        ctx.defer().await?;

        let board = dashboard::load_dashboard(db, &owner_id, today).await?;

        if board.stats.total_cars == 0 {
            ctx.say("🚗 Nenhum carro cadastrado. Use `/add_car` para começar!")
                .await?;
            return Ok(());
        }

        let stats = &board.stats;
        let mut embed_fields = vec![(
            "Resumo".to_string(),
            format!(
                "🚗 {} carro(s)\n🔴 {} com manutenção atrasada\n🟡 {} com manutenção próxima\n🟢 {} em dia",
                stats.total_cars,
                stats.cars_with_overdue,
                stats.cars_with_upcoming,
                stats.cars_up_to_date
            ),
            false,
        )];

        if !board.overdue.is_empty() {
            embed_fields.push((
                format!("Atrasadas ({})", board.overdue.len()),
                render_alerts(&board.overdue)?,
                false,
            ));
        }
        if !board.upcoming.is_empty() {
            embed_fields.push((
                format!("Próximas ({})", board.upcoming.len()),
                render_alerts(&board.upcoming)?,
                false,
            ));
        }

        // Red when something is late, yellow when something is close, green otherwise
        let color: u32 = if !board.overdue.is_empty() {
            0x00E7_4C3C
        } else if !board.upcoming.is_empty() {
            0x00F1_C40F
        } else {
            0x002E_CC71
        };

        let embed = serenity::CreateEmbed::default()
            .title("🔧 Painel de manutenção")
            .description(format!("Situação em {}", format_date(today)))
            .color(color)
            .fields(embed_fields)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "GarageBuddy v{}",
                env!("CARGO_PKG_VERSION")
            )));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        #![allow(clippy::unwrap_used)]
        use super::*;
        use crate::{
            core::due_status::{DueAssessment, DueStatus},
            entities::{car, maintenance_record},
        };
        use chrono::NaiveDate;

        fn alert(id: i64, brand: &str) -> MaintenanceAlert {
            let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
            MaintenanceAlert {
                car: car::Model {
                    id,
                    owner_id: "1".to_string(),
                    brand: brand.to_string(),
                    model: "Uno".to_string(),
                    year: 2015,
                    license_plate: None,
                    color: None,
                    engine_type: None,
                    mileage: 50_000,
                    created_at: chrono::Utc::now(),
                },
                record: maintenance_record::Model {
                    id,
                    car_id: id,
                    maintenance_type_id: 1,
                    date_performed: today,
                    mileage_at_service: 40_000,
                    cost: 250.0,
                    next_service_km: Some(49_000),
                    next_service_date: Some(today),
                    service_provider: None,
                    notes: None,
                    created_at: chrono::Utc::now(),
                },
                maintenance_type: None,
                assessment: DueAssessment {
                    status: DueStatus::Overdue,
                    days_remaining: Some(-3),
                    km_remaining: Some(-1_000),
                },
            }
        }

        fn alerts(count: i64, brand: &str) -> Vec<MaintenanceAlert> {
            (1..=count).map(|id| alert(id, brand)).collect()
        }

        #[test]
        fn test_render_alerts_fits_without_footer() -> Result<()> {
            let value = render_alerts(&alerts(3, "Fiat"))?;
            assert_eq!(value.matches("Manutenção").count(), 3);
            assert!(!value.contains("e mais"));
            Ok(())
        }

        #[test]
        fn test_render_alerts_counts_alerts_past_the_limit() -> Result<()> {
            let value = render_alerts(&alerts(12, "Fiat"))?;
            assert_eq!(value.matches("Manutenção").count(), ALERT_LIMIT);
            assert!(value.ends_with("_... e mais 2_"));
            Ok(())
        }

        #[test]
        fn test_render_alerts_counts_alerts_cut_by_field_size() -> Result<()> {
            let value = render_alerts(&alerts(12, &"V".repeat(193)))?;
            let shown = value.matches("Manutenção").count();
            assert!(shown > 0 && shown < ALERT_LIMIT);
            assert!(value.ends_with(&format!("_... e mais {}_", 12 - shown)));
            assert!(value.len() <= FIELD_LIMIT);
            Ok(())
        }

        #[test]
        fn test_render_alerts_with_oversized_line_still_reports_count() -> Result<()> {
            let value = render_alerts(&alerts(12, &"V".repeat(1_100)))?;
            assert_eq!(value, "_... e mais 12_");
            Ok(())
        }
    }
}

// Re-export all commands
pub use inner::*;
