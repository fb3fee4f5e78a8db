use chrono::Local;
use env_logger::Builder;
use log::Level;
use std::io::Write;

pub fn init_logger() {
    Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let time = Local::now().format("%H:%M:%S%.3f");
            let level_color = match record.level() {
                Level::Error => "\x1b[31m\x1b[1m",
                Level::Warn => "\x1b[33m\x1b[1m",
                Level::Info => "\x1b[32m\x1b[1m",
                Level::Debug => "\x1b[36m",
                Level::Trace => "\x1b[90m",
            };
            writeln!(
                buf,
                "{} {}{:<5}\x1b[0m {} > {}",
                time,
                level_color,
                record.level(),
                record.target(),
                record.args(),
            )
        })
        .init();
}
