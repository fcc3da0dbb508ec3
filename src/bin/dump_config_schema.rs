use anyhow::Result;
use schemars::schema_for;

fn main() -> Result<()> {
    let schema = schema_for!(inkboard::Config);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
