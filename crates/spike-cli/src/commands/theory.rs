use spike_core::THEORY;

pub fn run() -> super::CommandResult {
    print!("{}", THEORY.render_text());
    Ok(())
}
