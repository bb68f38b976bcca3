use log::{error, info};
use ultimate_tictactoe::{Session, SessionArgs};

fn main() {
    env_logger::init();

    let args = SessionArgs::from_env();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), args);

    if let Err(e) = session.run() {
        error!("session failed: {}", e);
        std::process::exit(1);
    }
    info!("bye");
}
