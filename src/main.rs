//! Interactive tester comparing the host's float addition with `sfadd`.

#[macro_use] extern crate log;

use sfadd::{BitTable, Command, sf32};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "IEEE-754 Floating Point tester. Type:
    q: to quit
    v: <#> to see the FP representation of that value
    e: <#> + <#> to evaluate an addition expression
> ";

fn main() -> io::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    let mut line = String::new();
    loop {
        out.write_all(PROMPT.as_bytes())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF, treat like `q:`
            writeln!(out)?;
            break;
        }

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(cmd) => run(&mut out, cmd)?,
            Err(e) => {
                debug!("rejected input {:?}: {}", line, e);
                eprintln!("{}", e);
            }
        }
    }

    writeln!(out, "Bye! ^_^")?;
    Ok(())
}

fn run<W: Write>(out: &mut W, cmd: Command) -> io::Result<()> {
    match cmd {
        Command::Quit => Ok(()),
        Command::Value(v) => write!(out, "{}", BitTable::from(v)),
        Command::Expression(a, b) => {
            let natural = a + b;
            writeln!(out, "\nNatural evaluation {} + {} = {}\n", a, b, natural)?;
            write!(out, "{}", BitTable::from(natural))?;

            let artificial = sf32::from(a).add_checked(sf32::from(b));
            let sum = artificial.into_inner();
            debug!("software sum: {:?}", artificial);
            writeln!(out, "Artificial evaluation {} + {} = {}\n", a, b, sum)?;
            write!(out, "{}", BitTable(sum))?;

            if sum.to_bits() != natural.to_bits() {
                writeln!(out, "Results differ: {:?} vs. {:?}\n", sf32::from(natural), sum)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(cmd: Command) -> String {
        let mut out = Vec::new();
        run(&mut out, cmd).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn value() {
        let out = output(Command::Value(-2.0));
        assert!(out.contains("| 1    | 10000000 | 00000000000000000000000 |"), "{}", out);
    }

    #[test]
    fn expression_agrees() {
        let out = output(Command::Expression(1.0, 2.0));
        assert!(out.contains("Natural evaluation 1 + 2 = 3"), "{}", out);
        assert!(out.contains("Artificial evaluation 1 + 2 = 3"), "{}", out);
        assert!(!out.contains("Results differ"), "{}", out);
    }

    #[test]
    fn expression_differs() {
        // 1 + 1.5 ULP rounds up in hardware but is truncated in software.
        let out = output(Command::Expression(1.0, f32::from_bits(0x3440_0000)));
        assert!(out.contains("Results differ: 0x3F800002 vs. 0x3F800001"), "{}", out);
    }
}
