use anyhow::Result;
use codegate_client::Config;
use std::path::Path;

pub fn handle(data_dir: &Path, server_url: &str, page_size: u32) -> Result<()> {
    let mut config = Config::new(server_url);
    config.page_size = page_size.max(1);

    let path = Config::config_path(data_dir);
    config.save_to(&path)?;

    println!("Wrote {}", path.display());
    println!();
    println!("Next steps:");
    println!("  codegate auth login --username <name>   # obtain a session token");
    println!("  codegate code list                      # browse activation codes");
    println!("  codegate console                        # interactive dashboard");

    Ok(())
}
