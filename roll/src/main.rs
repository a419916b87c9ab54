use roll::cli::{Args, Command, RollCommand};

fn main() {
    let args = Args::from_env();

    match RollCommand::try_from_cli_args(args).and_then(|cmd| cmd.run()) {
        Ok(out) => print!("{}", out),
        Err(err) => {
            // validation failures go to stdout, followed by the usage hint
            println!("{}", err);
            println!("Try 'roll --help' for more information.");
            std::process::exit(1);
        }
    }
}
