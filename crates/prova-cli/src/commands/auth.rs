//! `prova auth <subcommand>` — account and session management.

use prova_auth::{AuthError, SessionStore};
use prova_core::Alert;
use prova_forms::RETRY_MESSAGE;

use crate::cli::{AuthCommands, CredentialArgs};
use crate::context::AppContext;
use crate::output;

pub async fn handle(action: &AuthCommands, ctx: &mut AppContext) -> anyhow::Result<()> {
    match action {
        AuthCommands::SignUp(args) => sign_up(args, ctx).await,
        AuthCommands::Login(args) => login(args, ctx).await,
        AuthCommands::Logout => logout(ctx),
        AuthCommands::Status => {
            status(ctx);
            Ok(())
        }
    }
}

async fn sign_up(args: &CredentialArgs, ctx: &mut AppContext) -> anyhow::Result<()> {
    match ctx.api.sign_up(&args.email, &args.password).await {
        Ok(()) => ctx.alerts.publish(Some(Alert::success(
            "Cadastro realizado! Faça login para continuar.",
        ))),
        Err(err) => {
            let text = err
                .server_message()
                .map_or_else(|| RETRY_MESSAGE.to_owned(), str::to_owned);
            ctx.alerts.publish(Some(Alert::error(text)));
        }
    }
    output::flush_alerts(&mut ctx.alerts);
    Ok(())
}

async fn login(args: &CredentialArgs, ctx: &mut AppContext) -> anyhow::Result<()> {
    match ctx
        .session
        .login(&ctx.api, &args.email, &args.password)
        .await
    {
        Ok(()) => ctx
            .alerts
            .publish(Some(Alert::success("Login realizado!"))),
        Err(AuthError::InvalidCredentials) => ctx
            .alerts
            .publish(Some(Alert::error("Email ou senha incorretos!"))),
        Err(_) => ctx.alerts.publish(Some(Alert::error(RETRY_MESSAGE))),
    }
    output::flush_alerts(&mut ctx.alerts);
    Ok(())
}

fn logout(ctx: &mut AppContext) -> anyhow::Result<()> {
    ctx.session.logout()?;
    println!("Sessão encerrada.");
    Ok(())
}

fn status(ctx: &AppContext) {
    println!("API: {}", ctx.config.api.base_url);
    if ctx.session.is_authenticated() {
        let source = SessionStore::token_source().unwrap_or_else(|| "memory".into());
        println!("Sessão: autenticada (token via {source})");
    } else {
        println!("Sessão: não autenticada");
    }
}
