use create_jtc::ui::output;

fn main() {
    if let Err(err) = create_jtc::cli::run() {
        output::error(&err);
        std::process::exit(1);
    }
}
