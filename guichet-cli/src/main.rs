//! Guichet CLI - administration console for the cash-desk backend
//!
//! Each subcommand is a "screen": navigation goes through the static menu and
//! its permission guard, exactly like the drawer of the mobile console this
//! replaces.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

use guichet_client::{resources::account, ApiClient, AuthManager, Requirement, SessionState, SessionStore};
use guichet_core::{
    config_error, init_logging, log_operation_start, log_operation_success, ErrorContext,
    GuichetConfig, GuichetError, GuichetResult, LoggingConfig, User,
};

mod guard;
mod menu;
mod screens;

use menu::ScreenId;
use screens::alimentations::AlimentationsAction;
use screens::operations::OperationKind;
use screens::roles::RolesAction;
use screens::users::UsersAction;
use screens::wilayas::WilayasAction;
use screens::MovementAction;

#[derive(Parser)]
#[command(name = "guichet")]
#[command(about = "Console d'administration des caisses")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a session
    Login {
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Close the current session
    Logout,

    /// Show the authenticated user and their permissions
    Whoami,

    /// Show the menu entries reachable with the current session
    Menu,

    /// Send a password-reset email
    ForgotPassword { email: String },

    /// Set a new password using the emailed token
    ResetPassword {
        email: String,

        #[arg(long)]
        token: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        password_confirmation: String,
    },

    /// Update the authenticated user's profile
    Profile {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,
    },

    /// Change the authenticated user's password
    Password {
        #[arg(long)]
        current_password: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        password_confirmation: String,
    },

    /// Resend the email-verification link
    ResendVerification,

    /// Confirm the email address with the token from the verification link
    VerifyEmail { token: String },

    /// Landing screen
    Dashboard,

    /// Manage users
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },

    /// Manage roles and their permissions
    Roles {
        #[command(subcommand)]
        action: RolesAction,
    },

    /// Manage wilayas
    Wilayas {
        #[command(subcommand)]
        action: WilayasAction,
    },

    /// Manage alimentations
    Alimentations {
        #[command(subcommand)]
        action: AlimentationsAction,
    },

    /// Admin-wide feed of cash movements
    Operations {
        /// Which movement kind to show
        #[arg(long, value_enum, default_value = "encaissement")]
        kind: OperationKind,
    },

    /// Caisse overview
    Caisses,

    /// Cash-in movements on your caisse
    Encaissements {
        #[command(subcommand)]
        action: MovementAction,
    },

    /// Cash-out movements on your caisse
    Decaissements {
        #[command(subcommand)]
        action: MovementAction,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Initialize default configuration
        #[arg(long)]
        init: bool,

        /// Validate current configuration
        #[arg(long)]
        validate: bool,
    },
}

#[tokio::main]
async fn main() -> GuichetResult<()> {
    let cli = Cli::parse();

    let mut logging_config = LoggingConfig::default();
    if cli.verbose {
        logging_config.level = "debug".to_string();
    }

    init_logging(&logging_config).map_err(|e| GuichetError::Config {
        message: format!("Failed to initialize logging: {}", e),
        source: Some(e),
        context: ErrorContext::new("cli")
            .with_operation("init_logging")
            .with_suggestion("Check logging configuration"),
    })?;

    info!("Starting Guichet CLI v{}", env!("CARGO_PKG_VERSION"));

    if let Err(missing) = menu::validate() {
        warn!(?missing, "menu entries without a registered screen");
    }

    // Config management works without a reachable backend.
    if let Commands::Config {
        show,
        init,
        validate,
    } = &cli.command
    {
        return handle_config(*show, *init, *validate, cli.config.as_ref());
    }

    let config = GuichetConfig::load(cli.config.as_ref())?;
    config.validate()?;

    let client = ApiClient::new(&config.api)?;
    let store = SessionStore::open(config.data_dir())?;
    let mut auth = AuthManager::new(client, store);

    match cli.command {
        Commands::Login { email, password } => {
            log_operation_start!("login", email = %email);
            auth.bootstrap().await;
            match auth.login(&email, &password).await {
                Ok(user) => {
                    log_operation_success!("login", user = %user.name);
                    println!("Session ouverte pour {} ({}).", user.name, user.role);
                }
                Err(err) => {
                    err.log();
                    println!("Échec de la connexion : {}", err);
                }
            }
        }
        Commands::Logout => {
            auth.bootstrap().await;
            auth.logout().await;
            println!("Session fermée.");
        }
        Commands::Whoami => {
            auth.bootstrap().await;
            match auth.state() {
                SessionState::Authenticated(user) => {
                    println!("{} <{}>", user.name, user.email);
                    println!("Rôle : {}", user.role);
                    println!("Permissions : {}", user.permissions.join(", "));
                }
                _ => println!("Aucune session active."),
            }
        }
        Commands::Menu => {
            if open_session(&mut auth).await.is_some() {
                let permissions = auth.permissions();
                for item in menu::compose(&permissions) {
                    println!("  [{}] {}", item.icon, item.label);
                }
            }
        }
        Commands::ForgotPassword { email } => {
            match account::forgot_password(auth.client(), &email).await {
                Ok(()) => println!("Email de réinitialisation envoyé à {email}."),
                Err(err) => screens::notice(
                    "account.forgot_password",
                    "impossible d'envoyer l'email de réinitialisation",
                    &err,
                ),
            }
        }
        Commands::ResetPassword {
            email,
            token,
            password,
            password_confirmation,
        } => {
            let payload = account::ResetPasswordPayload {
                email,
                token,
                password,
                password_confirmation,
            };
            match account::reset_password(auth.client(), &payload).await {
                Ok(()) => println!("Mot de passe réinitialisé."),
                Err(err) => screens::notice(
                    "account.reset_password",
                    "impossible de réinitialiser le mot de passe",
                    &err,
                ),
            }
        }
        Commands::Profile { name, email } => {
            if open_session(&mut auth).await.is_some() {
                let payload = account::ProfilePayload { name, email };
                match account::update_profile(auth.client(), &payload).await {
                    Ok(()) => println!("Profil mis à jour."),
                    Err(err) => screens::notice(
                        "account.update_profile",
                        "impossible de mettre à jour le profil",
                        &err,
                    ),
                }
            }
        }
        Commands::Password {
            current_password,
            password,
            password_confirmation,
        } => {
            if open_session(&mut auth).await.is_some() {
                let payload = account::PasswordPayload {
                    current_password,
                    password,
                    password_confirmation,
                };
                match account::update_password(auth.client(), &payload).await {
                    Ok(()) => println!("Mot de passe modifié."),
                    Err(err) => screens::notice(
                        "account.update_password",
                        "impossible de modifier le mot de passe",
                        &err,
                    ),
                }
            }
        }
        Commands::ResendVerification => {
            if open_session(&mut auth).await.is_some() {
                match account::resend_email_verification(auth.client()).await {
                    Ok(()) => println!("Email de vérification renvoyé."),
                    Err(err) => screens::notice(
                        "account.resend_verification",
                        "impossible de renvoyer l'email de vérification",
                        &err,
                    ),
                }
            }
        }
        Commands::VerifyEmail { token } => {
            if open_session(&mut auth).await.is_some() {
                match account::verify_email(auth.client(), &token).await {
                    Ok(()) => println!("Adresse email vérifiée."),
                    Err(err) => screens::notice(
                        "account.verify_email",
                        "impossible de vérifier l'adresse email",
                        &err,
                    ),
                }
            }
        }
        Commands::Dashboard => {
            if let Some(user) = open_session(&mut auth).await {
                let permissions = auth.permissions();
                guard::guarded(
                    screen_requirement(ScreenId::Dashboard)?,
                    &permissions,
                    || async { screens::dashboard::run(&user) },
                )
                .await?;
            }
        }
        Commands::Users { action } => {
            if open_session(&mut auth).await.is_some() {
                let permissions = auth.permissions();
                guard::guarded(screen_requirement(ScreenId::Users)?, &permissions, || {
                    screens::users::run(action, auth.client())
                })
                .await?;
            }
        }
        Commands::Roles { action } => {
            if open_session(&mut auth).await.is_some() {
                let permissions = auth.permissions();
                guard::guarded(screen_requirement(ScreenId::Roles)?, &permissions, || {
                    screens::roles::run(action, auth.client())
                })
                .await?;
            }
        }
        Commands::Wilayas { action } => {
            if open_session(&mut auth).await.is_some() {
                let permissions = auth.permissions();
                guard::guarded(screen_requirement(ScreenId::Wilayas)?, &permissions, || {
                    screens::wilayas::run(action, auth.client())
                })
                .await?;
            }
        }
        Commands::Alimentations { action } => {
            if open_session(&mut auth).await.is_some() {
                let permissions = auth.permissions();
                guard::guarded(
                    screen_requirement(ScreenId::Alimentation)?,
                    &permissions,
                    || screens::alimentations::run(action, auth.client()),
                )
                .await?;
            }
        }
        Commands::Operations { kind } => {
            if open_session(&mut auth).await.is_some() {
                let permissions = auth.permissions();
                guard::guarded(
                    screen_requirement(ScreenId::Operations)?,
                    &permissions,
                    || screens::operations::run(kind, auth.client()),
                )
                .await?;
            }
        }
        Commands::Caisses => {
            if let Some(user) = open_session(&mut auth).await {
                let permissions = auth.permissions();
                guard::guarded(screen_requirement(ScreenId::Caisses)?, &permissions, || {
                    screens::caisses::run(auth.client(), &user)
                })
                .await?;
            }
        }
        Commands::Encaissements { action } => {
            if open_session(&mut auth).await.is_some() {
                let permissions = auth.permissions();
                guard::guarded(
                    screen_requirement(ScreenId::Encaissement)?,
                    &permissions,
                    || screens::encaissements::run(action, auth.client()),
                )
                .await?;
            }
        }
        Commands::Decaissements { action } => {
            if open_session(&mut auth).await.is_some() {
                let permissions = auth.permissions();
                guard::guarded(
                    screen_requirement(ScreenId::Decaissement)?,
                    &permissions,
                    || screens::decaissements::run(action, auth.client()),
                )
                .await?;
            }
        }
        Commands::Config { .. } => unreachable!("handled before session setup"),
    }

    Ok(())
}

/// Restore the persisted session; print a login hint when there is none
async fn open_session(auth: &mut AuthManager) -> Option<User> {
    auth.bootstrap().await;
    match auth.state() {
        SessionState::Authenticated(user) => Some(user.clone()),
        _ => {
            println!("Aucune session active. Lancez «guichet login» d'abord.");
            None
        }
    }
}

fn screen_requirement(screen: ScreenId) -> GuichetResult<Requirement> {
    menu::requirement_for(screen)
        .ok_or_else(|| config_error!(format!("screen {:?} missing from the menu", screen), "cli"))
}

fn handle_config(
    show: bool,
    init: bool,
    validate: bool,
    config_path: Option<&PathBuf>,
) -> GuichetResult<()> {
    if init {
        let target = config_path
            .cloned()
            .or_else(|| GuichetConfig::default_paths().into_iter().flatten().next())
            .ok_or_else(|| config_error!("No writable configuration path found", "cli"))?;
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        GuichetConfig::default().save_to_file(&target)?;
        println!("Configuration créée : {}", target.display());
        return Ok(());
    }

    let config = GuichetConfig::load(config_path)?;

    if validate {
        config.validate()?;
        println!("Configuration valide.");
        return Ok(());
    }

    if show {
        let rendered = toml::to_string_pretty(&config).map_err(|e| GuichetError::Config {
            message: format!("Failed to render configuration: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("cli").with_operation("config_show"),
        })?;
        println!("{rendered}");
        return Ok(());
    }

    println!("Utilisez --show, --init ou --validate.");
    Ok(())
}
