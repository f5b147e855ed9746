//! General Discord commands - ping, help, and other utility commands.
//! This module contains simple commands that don't require database operations
//! and provide basic bot functionality and user assistance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**GarageBuddy - Ajuda**\n\
        Controle de manutenção e consumo dos seus veículos.\n\n\
        **Carros**\n\
        • `/cars` - Lista seus carros.\n\
        • `/add_car <marca> <modelo> <ano> <km> [placa] [cor] [motor]` - Cadastra um carro.\n\
        • `/update_car <carro> [...]` - Edita um carro (inclusive a quilometragem).\n\
        • `/delete_car <carro>` - Remove o carro e todo o seu histórico.\n\n\
        **Manutenção**\n\
        • `/maintenance_types` - Tipos de manutenção e intervalos padrão.\n\
        • `/log_service <carro> <tipo> [data] [km] [custo] ...` - Registra uma manutenção.\n\
        • `/services <carro>` - Histórico e situação das manutenções.\n\n\
        **Combustível**\n\
        • `/refuel <carro> <litros> [preço/l] [total] ...` - Registra um abastecimento.\n\
        • `/fuel <carro>` - Consumo médio, último consumo e gasto total.\n\n\
        **Painel**\n\
        • `/dashboard` - Manutenções atrasadas e próximas de todos os seus carros.\n\
        • `/ping` - Verifica se o bot está respondendo.\n\
        • `/help` - Mostra esta mensagem.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
