//! Entrypoint.

fn main() {
    if let Err(err) = repo_relay::initialize_command_line() {
        eprintln!("ERROR: {}", err);
        err.chain()
            .skip(1)
            .for_each(|cause| eprintln!("because: {}", cause));
        std::process::exit(1);
    }
}
