//! Book rendering: detail cards and aligned tables

use std::io::{self, Write};

use crate::book::Book;

const ID_WIDTH: usize = 10;
const ISBN_WIDTH: usize = 20;
const TITLE_WIDTH: usize = 30;
const AUTHOR_WIDTH: usize = 20;
const EDITION_WIDTH: usize = 20;
const PUBLICATION_WIDTH: usize = 20;
const CATEGORY_WIDTH: usize = 15;

/// Table width without / with the category column
const NARROW_WIDTH: usize = ID_WIDTH + ISBN_WIDTH + TITLE_WIDTH + AUTHOR_WIDTH + EDITION_WIDTH + PUBLICATION_WIDTH;
const WIDE_WIDTH: usize = NARROW_WIDTH + CATEGORY_WIDTH;

const CARD_WIDTH: usize = 42;

/// Write a section banner: the title centred in a line of `=`
pub(crate) fn render_banner<W: Write>(w: &mut W, title: &str, width: usize) -> io::Result<()> {
    writeln!(w, "{:=^width$}", format!(" {title} "))
}

/// Write a closing rule of `=`
pub(crate) fn render_rule<W: Write>(w: &mut W, width: usize) -> io::Result<()> {
    writeln!(w, "{}", "=".repeat(width))
}

/// Write the detail card for one book
pub fn render_details<W: Write>(w: &mut W, book: &Book) -> io::Result<()> {
    writeln!(w, "Book ID       : {}", book.id)?;
    render_banner(w, "BOOK DETAILS", CARD_WIDTH)?;
    writeln!(w, "ISBN          : {}", book.isbn)?;
    writeln!(w, "Title         : {}", book.title)?;
    writeln!(w, "Author        : {}", book.author)?;
    writeln!(w, "Edition       : {}", book.edition)?;
    writeln!(w, "Publication   : {}", book.publication)?;
    writeln!(w, "Category      : {}", book.category)?;
    render_rule(w, CARD_WIDTH)
}

/// Write books as a left-aligned table under a banner titled `title`
///
/// The category column is included only when `with_category` is set.
/// An empty slice still prints the header; callers decide how to report
/// "nothing found".
pub fn render_table<W: Write>(
    w: &mut W,
    title: &str,
    books: &[Book],
    with_category: bool,
) -> io::Result<()> {
    let width = if with_category { WIDE_WIDTH } else { NARROW_WIDTH };

    writeln!(w)?;
    render_banner(w, title, width)?;
    write!(
        w,
        "{:<ID_WIDTH$}{:<ISBN_WIDTH$}{:<TITLE_WIDTH$}{:<AUTHOR_WIDTH$}{:<EDITION_WIDTH$}{:<PUBLICATION_WIDTH$}",
        "ID", "ISBN", "TITLE", "AUTHOR", "EDITION", "PUBLICATION"
    )?;
    if with_category {
        write!(w, "{:<CATEGORY_WIDTH$}", "CATEGORY")?;
    }
    writeln!(w)?;
    writeln!(w, "{}", "-".repeat(width))?;

    for book in books {
        write!(
            w,
            "{:<ID_WIDTH$}{:<ISBN_WIDTH$}{:<TITLE_WIDTH$}{:<AUTHOR_WIDTH$}{:<EDITION_WIDTH$}{:<PUBLICATION_WIDTH$}",
            book.id, book.isbn, book.title, book.author, book.edition, book.publication
        )?;
        if with_category {
            write!(w, "{:<CATEGORY_WIDTH$}", book.category.as_str())?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Closing rule matching a table rendered with the same `with_category`
pub(crate) fn render_table_footer<W: Write>(w: &mut W, with_category: bool) -> io::Result<()> {
    render_rule(w, if with_category { WIDE_WIDTH } else { NARROW_WIDTH })
}
