mod command;
mod input;
mod schema;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
