use miette::Result;

/// Main entry point for the eggdeps-dot CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    eggdeps_dot::run()
}
