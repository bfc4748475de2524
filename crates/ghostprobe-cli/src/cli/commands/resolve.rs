//! `ghostprobe resolve <base> <path>`.

use ghostprobe_core::make_absolute_url;

pub fn run_resolve(base: &str, path: &str) {
    println!("{}", make_absolute_url(base, path));
}
