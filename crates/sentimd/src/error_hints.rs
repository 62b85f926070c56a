use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("no text provided") {
        push_hint(
            &mut out,
            "Pass the text as an argument, or pipe it in: `echo \"...\" | sentimd analyze`.",
        );
    }

    if haystack.contains("file type not allowed") {
        push_hint(&mut out, "Only `.txt` and `.csv` files are accepted.");
        push_hint(
            &mut out,
            "Use `--name <NAME>.txt` to treat a differently named text file as TXT.",
        );
    }

    if haystack.contains("no text content found in file") {
        push_hint(
            &mut out,
            "Lines and cells of 10 characters or fewer are skipped.",
        );
    }

    if haystack.contains("no data to export") {
        push_hint(&mut out, "Analyze something first with `sentimd analyze`.");
        push_hint(&mut out, "Check that `--owner` matches the owner you analyzed as.");
    }

    if haystack.contains("corrupt record") {
        push_hint(
            &mut out,
            "A record file under `--data-dir` was edited by hand; fix or remove the bad line.",
        );
    }

    if haystack.contains("no such file or directory") {
        push_hint(&mut out, "Verify the input path exists and is readable.");
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
