use std::error::Error;

use clap::{Parser, Subcommand};
use dh_crypto::crypto::encoding::to_wrapped_base64;
use dh_crypto::{GroupParameters, KeyAgreementParty, KeyExchangeAlgorithm, PublicValue};

/// Two simulated parties agree on a 96-byte secret over the 768-bit group.
#[derive(Parser, Debug)]
#[command(name = "dh_demo", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an exchange between Alice and Bob and print the exchanged values.
    Exchange {
        /// Column at which base64 output is wrapped (0 disables wrapping).
        #[arg(long, default_value_t = 40)]
        width: usize,
    },
    /// Describe the fixed group parameters.
    Params,
}

struct Transcript {
    alice_public: PublicValue,
    bob_public: PublicValue,
    shared_secret: Vec<u8>,
}

fn run_exchange(params: &GroupParameters) -> Result<Transcript, Box<dyn Error>> {
    let alice = KeyAgreementParty::new(params)?;
    let bob = KeyAgreementParty::new(params)?;

    // Public channel: only the base64 text crosses over.
    let alice_wire = alice.public_value().to_base64();
    let bob_wire = bob.public_value().to_base64();

    let alice_copy = alice.compute_shared_secret(PublicValue::from_base64(&bob_wire)?.as_bytes())?;
    let bob_copy = bob.compute_shared_secret(PublicValue::from_base64(&alice_wire)?.as_bytes())?;

    if alice_copy != bob_copy {
        log::error!("Alice and Bob derived different secrets");
        return Err("shared secret mismatch".into());
    }

    Ok(Transcript {
        alice_public: alice.public_value(),
        bob_public: bob.public_value(),
        shared_secret: alice_copy.as_bytes().to_vec(),
    })
}

fn render_exchange(transcript: &Transcript, width: usize) -> String {
    format!(
        "Alice's intermediate key:\n{}\n\nBob's intermediate key:\n{}\n\nShared secret:\n{}",
        to_wrapped_base64(transcript.alice_public.as_bytes(), width),
        to_wrapped_base64(transcript.bob_public.as_bytes(), width),
        to_wrapped_base64(&transcript.shared_secret, width),
    )
}

fn render_params(params: &GroupParameters) -> String {
    let order_check = if params.generator_has_large_order() {
        "ok"
    } else {
        "FAILED"
    };
    format!(
        "Modulus: {} bits / {} bytes\n  {}\nGenerator: {}\nPrivate exponent: {} random bytes\nGenerator order check (g^((p-1)/2) mod p != 1): {}",
        params.bit_len(),
        params.byte_len(),
        hex::encode(params.modulus().to_bytes_be()),
        params.generator(),
        params.exponent_bytes(),
        order_check,
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let params = GroupParameters::modp_768();

    match cli.command.unwrap_or(Command::Exchange { width: 40 }) {
        Command::Exchange { width } => {
            log::info!("Running {}-bit Diffie-Hellman exchange", params.bit_len());
            let transcript = run_exchange(&params)?;
            println!("{}", render_exchange(&transcript, width));
        }
        Command::Params => println!("{}", render_params(&params)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dh_crypto::crypto::encoding::decode_base64;

    #[test]
    fn exchange_produces_matching_96_byte_values() {
        let params = GroupParameters::modp_768();
        let transcript = run_exchange(&params).unwrap();
        assert_eq!(transcript.alice_public.as_bytes().len(), 96);
        assert_eq!(transcript.bob_public.as_bytes().len(), 96);
        assert_eq!(transcript.shared_secret.len(), 96);
        assert_ne!(transcript.alice_public, transcript.bob_public);
    }

    #[test]
    fn rendered_exchange_wraps_and_decodes() {
        let params = GroupParameters::modp_768();
        let transcript = run_exchange(&params).unwrap();
        let rendered = render_exchange(&transcript, 40);

        let sections: Vec<&str> = rendered.split("\n\n").collect();
        assert_eq!(sections.len(), 3);
        for section in &sections {
            let (_, body) = section.split_once('\n').unwrap();
            assert!(body.lines().all(|line| line.len() <= 40));
        }

        let (_, secret_text) = sections[2].split_once('\n').unwrap();
        assert_eq!(decode_base64(secret_text).unwrap(), transcript.shared_secret);
    }

    #[test]
    fn params_report_passes_order_check() {
        let report = render_params(&GroupParameters::modp_768());
        assert!(report.starts_with("Modulus: 768 bits / 96 bytes"));
        assert!(report.contains("Generator: 2"));
        assert!(report.ends_with("ok"));
    }

    #[test]
    fn cli_parses_width() {
        let cli = Cli::parse_from(["dh_demo", "exchange", "--width", "64"]);
        assert!(matches!(cli.command, Some(Command::Exchange { width: 64 })));

        let cli = Cli::parse_from(["dh_demo"]);
        assert!(cli.command.is_none());
    }
}
