use daw_detect::{Cubase, Scanner};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let installations = Scanner::default().scan(&Cubase);

    match installations {
        Ok(list) => {
            println!("Installed DAWs: {}", list.len());
            for app in list {
                println!("{} ({})", app, app.path.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
        }
    }

    Ok(())
}
