use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "binary-fixture", version)]
#[command(
    about = "Write a fixed 40-byte binary file (test_binary.bin) containing bytes that are \
                   not valid UTF-8, then report its size."
)]
pub struct Cli {}
