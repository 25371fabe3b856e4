//! RV32I single-cycle datapath simulator CLI.
//!
//! This binary provides the command-line surface for the simulator core. It performs:
//! 1. **Assemble:** Translate a source file and print the machine words (or JSON).
//! 2. **Run:** Assemble, load, and execute a source file step by step, with
//!    optional per-step traces and a JSON state dump at the end.

use clap::{Parser, Subcommand};
use std::{fs, process};

use rv32_core::{Cpu, assemble};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "RV32I single-cycle datapath simulator",
    long_about = "Assemble and execute a constrained RV32I subset against a \
single-cycle datapath model.\n\nExamples:\n  sim asm -f prog.s\n  sim asm -f prog.s --json\n  sim run -f prog.s --steps 100 --trace\n  sim run -f prog.s --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble a source file and print the machine words.
    Asm {
        /// Assembly source file.
        #[arg(short, long)]
        file: String,

        /// Emit the program (machine code + line map) as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Assemble a source file and execute it.
    Run {
        /// Assembly source file.
        #[arg(short, long)]
        file: String,

        /// Maximum number of steps before stopping.
        #[arg(long, default_value_t = 10_000)]
        steps: u64,

        /// Print a one-line trace for every retired instruction.
        #[arg(long)]
        trace: bool,

        /// Emit the final CPU state as JSON instead of a register dump.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    match Cli::parse().command {
        Commands::Asm { file, json } => cmd_asm(&file, json),
        Commands::Run {
            file,
            steps,
            trace,
            json,
        } => cmd_run(&file, steps, trace, json),
    }
}

/// Reads a source file or exits with a message.
fn read_source(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {path}: {e}");
        process::exit(1);
    })
}

/// Assembles `path` or exits with the failing line.
fn assemble_file(path: &str) -> rv32_core::Program {
    match assemble(&read_source(path)) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("[!] Assembly failed: {e}");
            process::exit(1);
        }
    }
}

/// Runs the `asm` subcommand: assemble and print.
fn cmd_asm(path: &str, json: bool) {
    let program = assemble_file(path);

    if json {
        match serde_json::to_string_pretty(&program) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error serializing program: {e}");
                process::exit(1);
            }
        }
        return;
    }

    for (index, (word, line)) in program
        .machine_code
        .iter()
        .zip(&program.line_map)
        .enumerate()
    {
        println!("{:#06x}: {word:#010x}   # line {line}", index * 4);
    }
}

/// Runs the `run` subcommand: assemble, load, and step until the program
/// ends, the step budget is spent, or a fault stops the machine.
fn cmd_run(path: &str, steps: u64, trace: bool, json: bool) {
    let program = assemble_file(path);

    let mut cpu = Cpu::default();
    if let Err(e) = cpu.program_mem.load(&program.machine_code) {
        eprintln!("[!] Program does not fit in memory: {e}");
        process::exit(1);
    }

    println!(
        "[*] Loaded {} instructions, running up to {steps} steps",
        program.machine_code.len()
    );

    // One past the last loaded instruction; reaching it is a clean end.
    let end = program.machine_code.len() as u32 * 4;

    while cpu.cycles() < steps && cpu.pc.value() < end {
        match cpu.step() {
            Ok(t) => {
                if trace {
                    println!(
                        "pc={:#010x} inst={:#010x} alu={:<11} taken={} next={:#010x}",
                        t.pc_before, t.instruction, t.alu_result, t.branch_taken, t.pc_after
                    );
                }
            }
            Err(e) => {
                eprintln!("\n[!] FATAL FAULT: {e}");
                cpu.regs.dump();
                process::exit(1);
            }
        }
    }

    println!(
        "\n[*] {} steps retired, final PC {:#010x}",
        cpu.cycles(),
        cpu.pc.value()
    );

    if json {
        match cpu.state().to_json() {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error serializing state: {e}");
                process::exit(1);
            }
        }
    } else {
        cpu.regs.dump();
    }
}
