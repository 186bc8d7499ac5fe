use super::options::SeqOpts;

/// Symbols per line when printing sequences.
pub const DISPLAY_WIDTH: usize = 30;

/// Break `text` into lines of at most `width` characters.
pub fn wrap_display(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width.max(1))
        .map(|line| line.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join("\n")
}

/// Print a titled block of wrapped text when the user asked to see intermediate results.
pub fn report(opts: &SeqOpts, title: &str, body: &str) {
    if opts.show {
        println!("{}\n{}\n", title, wrap_display(body, DISPLAY_WIDTH));
    }
}
