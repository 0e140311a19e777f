use std::io::{BufRead, Write};
use std::process::exit;
use std::time::Instant;

use log::{debug, error, info, LevelFilter};

use word_freq::count::count_lines;
use word_freq::error::PipelineError;
use word_freq::logging::set_logger_or_exit;
use word_freq::rank::{rank, RankedEntry};
use word_freq::util::*;

#[inline(never)]
fn read_lines(input: Box<dyn BufRead>) -> Result<Vec<String>, PipelineError> {
    let mut lines = Vec::new();
    for line in input.lines() {
        lines.push(line.map_err(PipelineError::InputRead)?);
    }
    Ok(lines)
}

#[inline(never)]
fn write_out(output: &mut dyn Write, ranked: &[RankedEntry]) -> Result<(), PipelineError> {
    for (word, count) in ranked {
        write!(output, "{} {}\n", word, count).map_err(PipelineError::OutputWrite)?;
    }
    output.flush().map_err(PipelineError::OutputWrite)
}

fn run(conf: &Config) -> Result<(), PipelineError> {
    let input = open_input(conf).map_err(PipelineError::InputRead)?;
    let lines = read_lines(input)?;
    debug!("read {} lines", lines.len());

    let frequency = count_lines(&lines, conf.threads)?;
    let ranked = rank(frequency);
    debug!("{} distinct words", ranked.len());

    let mut output = open_output(conf).map_err(PipelineError::OutputWrite)?;
    write_out(output.as_mut(), &ranked)
}

fn main() {
    let conf = parse_args("word frequency count");
    let log_level = if conf.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    set_logger_or_exit(&conf.log, log_level);

    let (start_usr_time, start_sys_time) = get_cputime_usecs();
    let start_time = Instant::now();

    if let Err(err) = run(&conf) {
        error!("{}", err);
        exit(1);
    }

    let difference = start_time.elapsed();
    let (end_usr_time, end_sys_time) = get_cputime_usecs();
    let usr_time = (end_usr_time - start_usr_time) as f64 / 1_000_000.0;
    let sys_time = (end_sys_time - start_sys_time) as f64 / 1_000_000.0;
    info!(
        "walltime: {:?} (usr: {:.3}s sys: {:.3}s)",
        difference, usr_time, sys_time
    );
}
