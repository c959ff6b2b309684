use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use innkeep_acl::{PgAccessControl, role_definitions};
use innkeep_cli::output::{format_permissions, format_roles};
use innkeep_config::DatabaseConfig;
use innkeep_db::{PgPool, init_db_pool, run_migrations};
use innkeep_models::{PermissionOverride, TenantId, UserId};

#[derive(Parser)]
#[command(name = "innkeep-cli")]
#[command(about = "Innkeep CLI - Access-control administration for Innkeep", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the static role table
    Roles,
    /// Print a user's effective permissions within a tenant
    Permissions {
        #[arg(short = 't', long)]
        tenant: TenantId,

        #[arg(short = 'u', long)]
        user: UserId,
    },
    /// Inspect or replace a user's permission override
    Overrides {
        #[command(subcommand)]
        action: OverrideAction,
    },
    /// Apply pending database migrations
    Migrate,
}

#[derive(Subcommand)]
enum OverrideAction {
    /// Print the stored override as JSON
    Get {
        #[arg(short = 't', long)]
        tenant: TenantId,

        #[arg(short = 'u', long)]
        user: UserId,
    },
    /// Replace the stored override
    Set {
        #[arg(short = 't', long)]
        tenant: TenantId,

        #[arg(short = 'u', long)]
        user: UserId,

        /// Permission key to grant (repeatable)
        #[arg(long = "add")]
        add: Vec<String>,

        /// Permission key to revoke (repeatable)
        #[arg(long = "remove")]
        remove: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    // The role table is static; no database needed.
    if let Commands::Roles = cli.command {
        println!("{}", format_roles(&role_definitions()));
        return;
    }

    let pool = init_db_pool(&DatabaseConfig::from_env()).await;

    match cli.command {
        Commands::Roles => {}
        Commands::Permissions { tenant, user } => handle_permissions(&pool, tenant, user).await,
        Commands::Overrides { action } => match action {
            OverrideAction::Get { tenant, user } => handle_get_overrides(&pool, tenant, user).await,
            OverrideAction::Set {
                tenant,
                user,
                add,
                remove,
            } => handle_set_overrides(&pool, tenant, user, add, remove).await,
        },
        Commands::Migrate => handle_migrate(&pool).await,
    }
}

async fn handle_permissions(pool: &PgPool, tenant: TenantId, user: UserId) {
    let access = PgAccessControl::postgres(pool.clone());

    match access.effective_permissions(tenant, user).await {
        Ok((role, permissions)) => {
            println!("Role: {}", role.as_deref().unwrap_or("(none)"));
            println!("{}", format_permissions(&permissions));
        }
        Err(e) => {
            eprintln!("❌ Error resolving permissions: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_get_overrides(pool: &PgPool, tenant: TenantId, user: UserId) {
    let access = PgAccessControl::postgres(pool.clone());

    let overrides = match access.get_overrides(tenant, user).await {
        Ok(overrides) => overrides,
        Err(e) => {
            eprintln!("❌ Error reading overrides: {}", e);
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&overrides) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("❌ Error encoding overrides: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_set_overrides(
    pool: &PgPool,
    tenant: TenantId,
    user: UserId,
    add: Vec<String>,
    remove: Vec<String>,
) {
    let access = PgAccessControl::postgres(pool.clone());

    match access
        .set_overrides(tenant, user, PermissionOverride::new(add, remove))
        .await
    {
        Ok(permissions) => {
            println!("✅ Override saved for user {} in tenant {}", user, tenant);
            println!("{}", format_permissions(&permissions));
        }
        Err(e) => {
            eprintln!("❌ Error saving overrides: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_migrate(pool: &PgPool) {
    match run_migrations(pool).await {
        Ok(()) => println!("✅ Migrations applied"),
        Err(e) => {
            eprintln!("❌ Error applying migrations: {}", e);
            std::process::exit(1);
        }
    }
}
