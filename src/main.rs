use svgdoc::svg::{catalog_json, escape, find_schema, to_document, DocumentOptions};
use svgdoc::{gallery, parse_clock_value};

fn print_help() {
    println!("svgdoc - Build SVG documents from typed elements");
    println!();
    println!("Usage: svgdoc <COMMAND> [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  demo <NAME>      Print a gallery document");
    println!("  schema [TAG]     Print the element catalog, or one entry, as JSON");
    println!("  clock <VALUE>    Parse a clock value and print its shortest form");
    println!("  escape <TEXT>    Escape text for use in SVG content");
    println!();
    println!("Options:");
    println!("  -h, --help           Show this help message");
    println!("  --xml-declaration    Prefix demo output with the XML declaration");
    println!();
    println!("Gallery: {}", gallery::NAMES.join(", "));
    println!();
    println!("Example:");
    println!("  svgdoc demo shapes > shapes.svg");
    println!("  svgdoc clock 90min");
    println!("  RUST_LOG=trace svgdoc demo text");
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args.iter().any(|a| a == "-h" || a == "--help") {
        print_help();
        return;
    }

    let xml_declaration = args.iter().any(|a| a == "--xml-declaration");
    let operands: Vec<&String> = args.iter().skip(2).filter(|a| !a.starts_with("--")).collect();

    match args[1].as_str() {
        "demo" => {
            let name = operands
                .first()
                .unwrap_or_else(|| fail("demo needs a name"));
            let svg = gallery::demo(name)
                .unwrap_or_else(|| fail(format!("unknown demo {:?}", name)));
            let options = DocumentOptions {
                xml_declaration,
                ..Default::default()
            };
            println!("{}", to_document(&svg, Some(options)));
        }
        "schema" => {
            let json = match operands.first() {
                Some(tag) => {
                    let schema = find_schema(tag)
                        .unwrap_or_else(|| fail(format!("unknown element {:?}", tag)));
                    serde_json::to_string_pretty(&schema)
                }
                None => catalog_json(),
            };
            match json {
                Ok(json) => println!("{}", json),
                Err(e) => fail(e),
            }
        }
        "clock" => {
            let value = operands
                .first()
                .unwrap_or_else(|| fail("clock needs a value"));
            match parse_clock_value(value) {
                Ok(clock) => println!("{}", clock),
                Err(e) => fail(e),
            }
        }
        "escape" => {
            let text = operands
                .first()
                .unwrap_or_else(|| fail("escape needs some text"));
            println!("{}", escape(text));
        }
        other => fail(format!("unknown command {:?} (try --help)", other)),
    }
}
