use club_persistence_mariadb::{DatabaseConfig, QueryHelper, create_db_pool, schema};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: add_admin <username> <password>");
        std::process::exit(1);
    }

    let username = &args[1];
    let password = &args[2];

    let config = match DatabaseConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let helper = QueryHelper::new(create_db_pool(&config));

    match schema::insert_admin(&helper, username, password).await {
        Ok(true) => println!("Created admin [{}]", username),
        Ok(false) => {
            eprintln!("Admin with username [{}] already exists", username);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to create admin: {}", e);
            std::process::exit(1);
        }
    }
}
