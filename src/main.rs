use clap::Parser;
use miette::{IntoDiagnostic, Result};
use ordersystem::app::App;
use ordersystem::application::dto::CreateOrderInput;
use ordersystem::config::{Cli, Command, Config};
use ordersystem::interfaces::csv::order_reader::OrderReader;
use ordersystem::interfaces::csv::order_writer::OrderWriter;
use ordersystem::logging::init_logger;
use std::fs::File;
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from(&cli);
    init_logger(config.verbose);

    let app = App::from_config(&config).into_diagnostic()?;

    match cli.command {
        Command::Create { id, price, tax } => {
            let output = app
                .create_order
                .execute(CreateOrderInput { id, price, tax })
                .await
                .into_diagnostic()?;
            println!("{}", serde_json::to_string(&output.order).into_diagnostic()?);
        }
        Command::List => print_orders(&app).await?,
        Command::Import { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = OrderReader::new(file);
            for row in reader.orders() {
                match row {
                    Ok(input) => {
                        if let Err(e) = app.create_order.execute(input).await {
                            tracing::error!(error = %e, "Error creating order");
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Error reading order");
                    }
                }
            }
            print_orders(&app).await?;
        }
    }

    Ok(())
}

async fn print_orders(app: &App) -> Result<()> {
    let listed = app.list_orders.execute().await.into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = OrderWriter::new(stdout.lock());
    writer.write_orders(&listed.orders).into_diagnostic()?;
    Ok(())
}
