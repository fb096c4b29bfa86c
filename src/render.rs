use std::borrow::Cow;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::library::{Library, Track};

const PAGE_HEADER: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>YourLibrary to html converter</title>
<link href="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/css/bootstrap.min.css" rel="stylesheet" integrity="sha384-1BmE4kWBq78iYhFldvKuhfTAU6auU8tT94WrHftjDbrCEXSU1oBoqyl2QvZ6jIW3" crossorigin="anonymous">
<link href="https://cdn.datatables.net/1.11.5/css/dataTables.bootstrap5.min.css" rel="stylesheet"/>
<link href="https://cdn.datatables.net/select/1.3.4/css/select.dataTables.min.css" rel="stylesheet"/>
<link href="https://cdn.datatables.net/buttons/2.2.2/css/buttons.bootstrap5.min.css" rel="stylesheet"/>
<script src="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/js/bootstrap.bundle.min.js" integrity="sha384-ka7Sk0Gln4gmtz2MlQnikT1wXgYsOg+OMhuP+IlRH9sENBO0LRn5q+8nbTov4+1p" crossorigin="anonymous"></script>
<script src="https://code.jquery.com/jquery-3.6.0.min.js"></script>
<script src="https://cdn.datatables.net/1.11.5/js/jquery.dataTables.min.js"></script>
<script src="https://cdn.datatables.net/1.11.5/js/dataTables.bootstrap5.min.js"></script>
<script src="https://cdn.datatables.net/select/1.3.4/js/dataTables.select.min.js"></script>
<script src="https://cdn.datatables.net/buttons/2.2.2/js/dataTables.buttons.min.js"></script>
<script src="https://cdn.datatables.net/buttons/2.2.2/js/buttons.bootstrap5.min.js"></script>
<script>
$(document).ready(function(){
	$("table").DataTable({
		paging: false,
		select: true,
		dom: 'Bfrtip',
		buttons: [
			'copy', 'csv', 'excel', 'pdf', 'print'
		],
	});
});
</script>
</head>
<body>
<div class="container">
"#;

const PAGE_FOOTER: &str = "</div>
</body>
</html>
";

const TRACKS_TABLE_HEADER: &str = r#"<div class="table-responsive">
<table class="table" data-order='[[0,"asc"]]'>
<thead>
<tr>
<th scope="col">#</th>
<th scope="col">Artist</th>
<th scope="col">Track</th>
<th scope="col">Album</th>
</tr>
</thead>
<tbody>
"#;

const TABLE_FOOTER: &str = "</tbody>
</table>
</div>
";

/// Where the page for `input` is written: the file name loses its last
/// extension and gains `.html`, in the same directory.
///
/// `export.json` becomes `export.html`, `data` becomes `data.html`.
#[must_use]
pub fn output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.rfind('.').map_or(name.as_str(), |dot| &name[..dot]);
    input.with_file_name(format!("{stem}.html"))
}

/// Replace the characters that would change the meaning of the markup.
#[must_use]
pub fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['<', '>', '&', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn write_title<W: Write>(out: &mut W, title: &str) -> std::io::Result<()> {
    writeln!(out, "<h2>{title}</h2>")
}

/// Writes a [`Library`] as a standalone HTML page.
///
/// Only the `tracks` category is rendered. Record values go into the
/// cells verbatim unless escaping is turned on, so an export containing
/// markup characters produces broken HTML by default.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer {
    escape: bool,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new(escape: bool) -> Self {
        HtmlRenderer { escape }
    }

    pub fn render<W: Write>(&self, library: &Library, out: &mut W) -> std::io::Result<()> {
        out.write_all(PAGE_HEADER.as_bytes())?;

        if !library.tracks.is_empty() {
            write_title(out, "Tracks")?;
            out.write_all(TRACKS_TABLE_HEADER.as_bytes())?;
            for (index, track) in library.tracks.iter().enumerate() {
                self.write_track_row(out, index + 1, track)?;
            }
            out.write_all(TABLE_FOOTER.as_bytes())?;
        }

        out.write_all(PAGE_FOOTER.as_bytes())
    }

    fn write_track_row<W: Write>(
        &self,
        out: &mut W,
        number: usize,
        track: &Track,
    ) -> std::io::Result<()> {
        writeln!(
            out,
            r#"<tr><th scope="col">{number}</th><td>{}</td><td>{}</td><td>{}</td></tr>"#,
            self.cell(&track.artist),
            self.cell(&track.track),
            self.cell(&track.album),
        )
    }

    fn cell<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape {
            escape_html(value)
        } else {
            Cow::Borrowed(value)
        }
    }
}
