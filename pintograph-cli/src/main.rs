mod cli;

fn main() {
    cli::Entry::main()
}
