use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// May `path` be (over)written? Missing files and `force` need no answer;
/// otherwise the user is asked on stdin.
pub fn confirm_overwrite(path: &Path, force: bool) -> AppResult<bool> {
    if force || !path.exists() {
        return Ok(true);
    }

    warning(format!("The file '{}' already exists.", path.display()));
    let yes = ask_yes_no("Overwrite? [y/N]: ", &mut io::stdin().lock())?;
    if yes {
        info("Existing file will be overwritten.");
    }
    Ok(yes)
}

/// Print `prompt` and read one line. Only `y`/`yes` count as consent; EOF is a no.
pub fn ask_yes_no<R: BufRead>(prompt: &str, input: &mut R) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
