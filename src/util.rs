use argparse::{ArgumentParser, Print, Store, StoreOption, StoreTrue};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

pub struct Config {
    pub output: Option<String>,
    pub input: Option<String>,
    pub threads: usize,
    pub log: String,
    pub verbose: bool,
}

pub fn parse_args(description: &str) -> Config {
    let mut conf: Config = Config {
        output: None,
        input: None,
        threads: num_cpus::get(),
        log: "-".to_string(),
        verbose: false,
    };

    {
        // this block limits scope of borrows by ap.refer() method
        let mut ap = ArgumentParser::new();

        ap.set_description(description);
        ap.add_option(
            &["-V", "--version"],
            Print(env!("CARGO_PKG_VERSION").to_string()),
            "Show version",
        );

        ap.refer(&mut conf.input)
            .add_argument("input", StoreOption, "input file - default: stdin");

        ap.refer(&mut conf.output).add_argument(
            "output",
            StoreOption,
            "output file - default: stdout",
        );

        ap.refer(&mut conf.threads).add_option(
            &["-t", "--threads"],
            Store,
            "worker thread count - default: all logical cpus",
        );

        ap.refer(&mut conf.log).add_option(
            &["-l", "--log"],
            Store,
            "log destination, \"-\" for stderr - default: stderr",
        );

        ap.refer(&mut conf.verbose).add_option(
            &["-v", "--verbose"],
            StoreTrue,
            "debug logging",
        );

        ap.parse_args_or_exit();
    }

    return conf;
}

#[inline(never)]
pub fn open_input(conf: &Config) -> io::Result<Box<dyn BufRead>> {
    let input: Box<dyn BufRead> = match &conf.input {
        None => Box::new(BufReader::new(io::stdin())),
        Some(filename) => Box::new(BufReader::new(File::open(filename)?)),
    };
    Ok(input)
}

#[inline(never)]
pub fn open_output(conf: &Config) -> io::Result<Box<dyn Write>> {
    let output: Box<dyn Write> = match &conf.output {
        None => Box::new(BufWriter::new(io::stdout())),
        Some(filename) => Box::new(BufWriter::new(File::create(filename)?)),
    };
    Ok(output)
}

use libc::{c_long, getrusage, rusage, suseconds_t, time_t, timeval, RUSAGE_SELF};

pub fn get_cputime_usecs() -> (u64, u64) {
    let mut usage = rusage {
        ru_utime: timeval { tv_sec: 0 as time_t, tv_usec: 0 as suseconds_t },
        ru_stime: timeval { tv_sec: 0 as time_t, tv_usec: 0 as suseconds_t },
        ru_maxrss: 0 as c_long,
        ru_ixrss: 0 as c_long,
        ru_idrss: 0 as c_long,
        ru_isrss: 0 as c_long,
        ru_minflt: 0 as c_long,
        ru_majflt: 0 as c_long,
        ru_nswap: 0 as c_long,
        ru_inblock: 0 as c_long,
        ru_oublock: 0 as c_long,
        ru_msgsnd: 0 as c_long,
        ru_msgrcv: 0 as c_long,
        ru_nsignals: 0 as c_long,
        ru_nvcsw: 0 as c_long,
        ru_nivcsw: 0 as c_long,
    };

    unsafe {
        getrusage(RUSAGE_SELF, (&mut usage) as *mut rusage);
    }

    let u_secs = usage.ru_utime.tv_sec as u64;
    let u_usecs = usage.ru_utime.tv_usec as u64;
    let s_secs = usage.ru_stime.tv_sec as u64;
    let s_usecs = usage.ru_stime.tv_usec as u64;

    let u_time = (u_secs * 1_000_000) + u_usecs;
    let s_time = (s_secs * 1_000_000) + s_usecs;

    (u_time, s_time)
}
