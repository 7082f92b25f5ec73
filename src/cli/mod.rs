mod context;
mod flags;
mod parse;
pub mod prompts;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

/// Run client mode. Exits nonzero when the arguments don't parse.
pub fn run(args: Vec<String>) {
    match Context::new(args) {
        Ok(mut ctx) => {
            let _ = ctx.run();
        }
        Err(msg) => {
            prompts::error(&msg);
            std::process::exit(2);
        }
    }
}
