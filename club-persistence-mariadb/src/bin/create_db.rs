use club_persistence_mariadb::{DatabaseConfig, QueryHelper, create_db_pool, schema};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match DatabaseConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let helper = QueryHelper::new(create_db_pool(&config));
    let tables = match schema::create_tables(&helper).await {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("Failed to create tables: {}", e);
            std::process::exit(1);
        }
    };
    for table in tables {
        println!("Ensured table {}", table);
    }

    println!(
        "Created tables in database [{}] on {}:{}",
        config.database, config.host, config.port
    );
}
