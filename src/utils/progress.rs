use indicatif::{ProgressBar, ProgressStyle};

pub fn create_progress_bar(len: u64, title: impl Into<String>) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("{msg} ({pos}/{len})\n[{bar:40.cyan/blue}] {percent}% • {elapsed_precise} (ETA: {eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");

    ProgressBar::new(len).with_message(title.into()).with_style(style)
}
