use crate::domain::models;

pub fn run() -> anyhow::Result<()> {
    for model in models::available_models() {
        println!("{model}");
    }

    Ok(())
}
