use ferrous_lookup_domain::Subject;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Subjects from the command line, or one per line on stdin when none were
/// given.
pub async fn collect_subjects(args: &[String]) -> anyhow::Result<Vec<Subject>> {
    if !args.is_empty() {
        return parse_subjects(args.iter().map(String::as_str));
    }

    let lines = read_lines(BufReader::new(tokio::io::stdin())).await?;
    parse_subjects(lines.iter().map(String::as_str))
}

/// Blank lines and `#` comments are skipped.
pub fn parse_subjects<'a>(lines: impl Iterator<Item = &'a str>) -> anyhow::Result<Vec<Subject>> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| Subject::parse(line).map_err(anyhow::Error::from))
        .collect()
}

async fn read_lines<R: AsyncBufRead + Unpin>(reader: R) -> anyhow::Result<Vec<String>> {
    let mut lines = reader.lines();
    let mut collected = Vec::new();
    while let Some(line) = lines.next_line().await? {
        collected.push(line);
    }
    Ok(collected)
}
