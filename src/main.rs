use anyhow::Result;

fn main() -> Result<()> {
    sprout::commands::create::run()
}
