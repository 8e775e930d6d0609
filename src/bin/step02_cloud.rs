use std::path::Path;

use pipe_jump::basic_window_loop::basic_env_logger_init;

fn main() -> anyhow::Result<()> {
    basic_env_logger_init();
    pipe_jump::run_step02(Path::new(env!("CARGO_MANIFEST_DIR")))?;
    Ok(())
}
