use clap::Parser;

use dmr_core::{BitBuffer, debug, hexstr};
use dmr_pdus::csbk::{CSBK_BLOCK_BITS, CSBK_BLOCK_BYTES, Csbk};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "DMR CSBK Block Decoder",
    long_about = "Decodes a raw 96-bit CSBK data block, as emitted by the BPTC(196,96) decoder, \
                  and optionally re-encodes it to verify the round trip"
)]
struct Args {
    /// Block to decode
    #[arg(help = "CSBK block: 96-char bitstring or 24-digit hex string")]
    block: String,

    #[arg(
        short = 'e',
        long = "reencode",
        help = "Re-encode the decoded block and print it as hex"
    )]
    reencode: bool,
}

fn parse_block(input: &str) -> Option<BitBuffer> {
    let input = input.trim();
    if input.len() == CSBK_BLOCK_BITS && input.bytes().all(|b| b == b'0' || b == b'1') {
        return Some(BitBuffer::from_bitstr(input));
    }
    match hexstr::hexstr_to_bytes(input) {
        Some(bytes) if bytes.len() == CSBK_BLOCK_BYTES => Some(BitBuffer::from_bytes(&bytes)),
        _ => None,
    }
}

fn main() {
    eprintln!("[+] DMR CSBK block tool");

    let args = Args::parse();
    debug::setup_logging_verbose();

    let Some(mut buffer) = parse_block(&args.block) else {
        eprintln!(
            "Error: expected a {}-char bitstring or a {}-digit hex string",
            CSBK_BLOCK_BITS,
            CSBK_BLOCK_BYTES * 2
        );
        std::process::exit(1);
    };

    match Csbk::from_bitbuf(&mut buffer) {
        Ok(csbk) => {
            println!("{}", csbk);
            if args.reencode {
                let mut out = BitBuffer::new(CSBK_BLOCK_BITS);
                csbk.to_bitbuf(&mut out);
                println!("re-encoded: {}", out.dump_hex());
            }
        }
        Err(e) => {
            eprintln!("Failed decoding CSBK: {:?}", e);
            std::process::exit(1);
        }
    }
}
