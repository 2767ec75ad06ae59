//! File compressor built on the adaptive coder.
//!
//! `fgkpack <input> <output>` packs a file; `fgkpack -d <input> <output>`
//! expands it again. Prints the byte counts and the achieved ratio.

use std::env;
use std::fs;
use std::process;

const RAW_WIDTH: u32 = 8;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let (expand, input, output) = match args.as_slice() {
        [input, output] => (false, input.clone(), output.clone()),
        [flag, input, output] if flag.as_str() == "-d" => (true, input.clone(), output.clone()),
        _ => {
            eprintln!("usage: fgkpack [-d] <input> <output>");
            process::exit(2);
        }
    };

    let data = fs::read(&input).unwrap();
    let result = if expand {
        fgk::decompress(&data, RAW_WIDTH)
    } else {
        fgk::compress(&data, RAW_WIDTH)
    };
    let out = match result {
        Ok(out) => out,
        Err(err) => {
            eprintln!("fgkpack: {err}");
            process::exit(1);
        }
    };
    fs::write(&output, &out).unwrap();

    if expand {
        println!(
            "{input} -> {output} ({} -> {} bytes)",
            data.len(),
            out.len()
        );
    } else {
        let ratio = 100.0 * out.len() as f64 / data.len().max(1) as f64;
        println!(
            "{input} -> {output} ({} -> {} bytes, {ratio:.1}% of original)",
            data.len(),
            out.len()
        );
    }
}
