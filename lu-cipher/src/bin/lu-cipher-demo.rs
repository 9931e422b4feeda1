//! lu-cipher-demo: walk a message through the matrix cipher and back.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{error, info};

use lu_cipher::{
    CipherParams, LUCipherError, TransformPackage, decrypt_package, encrypt_message_with,
    matrix_to_display,
};

#[derive(Parser)]
#[command(name = "lu-cipher-demo")]
#[command(about = "Encrypt and decrypt short messages with the LU matrix cipher")]
#[command(version)]
struct Args {
    /// Render matrices as HTML tables instead of text grids
    #[arg(long, global = true)]
    html: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt a message and print its matrix, display ciphertext and package
    Encrypt {
        message: String,

        /// JSON file with cipher parameters (n, P, s_min, s_max)
        #[arg(long)]
        params: Option<PathBuf>,

        /// Write the package JSON here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Decrypt a package JSON file
    Decrypt { package: PathBuf },
}

fn render(matrix: &lu_cipher::field::Matrix, html: bool) -> String {
    let table = matrix_to_display(matrix);
    if html { table.to_html() } else { table.to_string() }
}

fn run(args: Args) -> Result<(), LUCipherError> {
    match args.command {
        Command::Encrypt {
            message,
            params,
            out,
        } => {
            let params = match params {
                Some(path) => CipherParams::from_json(&fs::read_to_string(&path)?)?,
                None => CipherParams::default(),
            };
            info!("encrypting with n = {}, P = {}", params.n, params.P);

            let result = encrypt_message_with(message.trim(), &params, &mut rand::rng())?;
            println!("{}\n", render(&result.matrix, args.html));
            println!("ciphertext: {}", result.ciphertext);

            let json = result.package.to_json()?;
            match out {
                Some(path) => {
                    fs::write(&path, json)?;
                    info!("package written to {}", path.display());
                }
                None => println!("package: {}", json),
            }
        }
        Command::Decrypt { package } => {
            let package = TransformPackage::from_json(&fs::read_to_string(&package)?)?;
            let result = decrypt_package(&package)?;
            println!("{}\n", render(&result.matrix, args.html));
            println!("plaintext: {}", result.plaintext);
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        error!("{}", e);
        std::process::exit(1);
    }
}
