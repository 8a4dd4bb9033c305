use damson::cli::game_loop;

fn main() {
    if let Err(err) = game_loop::run_stdio_loop() {
        eprintln!("fatal io error: {err}");
        std::process::exit(1);
    }
}
