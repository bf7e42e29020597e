mod common;

use common::{assert_close, init_logging, Op, RecordingWriter};
use pdf_flow::layout::{LayoutEngine, PageSetup};
use pdf_flow::{FontSelector, FontTable, PDFError, Pt, StyleContextBuilder};

const A4_WIDTH: f32 = 595.2756;
const A4_HEIGHT: f32 = 841.8898;

const LONG: &str = "Zolder vormt zondag het decor voor de strijd om de regenboogtrui in het veld. Volgt Mathieu van der Poel zichzelf op? Troeft Wout van Aert de Nederlandse titelverdediger af? Of is er een derde hond? Breng hier uw stem uit.";

#[test]
fn three_column_row_on_a_zero_margin_page() {
    init_logging();
    let mut engine = LayoutEngine::new(RecordingWriter::new()).unwrap();
    engine
        .write_table_row(&["naam1", "maarten", "vandeperre"])
        .unwrap();

    let line_height = 1156.0 / 1000.0 * 12.0 * 0.375;
    let row_height = line_height + 0.0 + 0.0 + 2.0 * 1.0;
    let column_width = A4_WIDTH / 3.0;
    let top = A4_HEIGHT;
    let bottom = A4_HEIGHT - row_height;

    let writer = engine.writer();
    assert!(writer.ops.contains(&Op::SetLineWidth(Pt(1.0))));

    let lines = writer.lines();
    assert_eq!(lines.len(), 4 + 2);
    for (j, (from, to)) in lines[..4].iter().enumerate() {
        assert_close(from.0, column_width * j as f32);
        assert_eq!(from.0, to.0);
        assert_close(from.1, bottom);
        assert_close(to.1, top);
    }
    let (top_from, top_to) = lines[4];
    assert_close(top_from.1, top);
    assert_close(top_to.1, top);
    assert_close(top_from.0, 0.0);
    assert_close(top_to.0, A4_WIDTH);
    let (bottom_from, _) = lines[5];
    assert_close(bottom_from.1, bottom);

    let texts = writer.texts();
    let drawn: Vec<&str> = texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(drawn, vec!["naam1", "maarten", "vandeperre"]);
    let baseline = top - 1.0 - line_height + line_height / 4.0;
    for (j, text) in texts.iter().enumerate() {
        assert_close(text.x, column_width * j as f32);
        assert_close(text.y, baseline);
    }

    assert_close(engine.cursor().current_y(), bottom);
}

#[test]
fn row_height_follows_the_tallest_cell() {
    let style = StyleContextBuilder::create()
        .font(FontSelector::Courier)
        .font_size(Pt(5.0))
        .margin_right(Pt(140.0))
        .border_width(Pt(0.5))
        .cell_margin_left(Pt(10.0))
        .cell_margin_right(Pt(10.0))
        .cell_margin_top(Pt(3.0))
        .cell_margin_bottom(Pt(4.0))
        .build();
    let mut engine = LayoutEngine::with_config(
        RecordingWriter::new(),
        PageSetup::default(),
        style,
        FontTable::default(),
    )
    .unwrap();
    engine
        .write_table_row(&[LONG, "Maarten Vandeperre"])
        .unwrap();

    let line_height = 1055.0 / 1000.0 * 5.0 * 0.375;
    let row_height = line_height * 5.0 + 3.0 + 4.0 + 2.0 * 0.5;
    let column_width = (A4_WIDTH - 140.0) / 2.0;
    let top = A4_HEIGHT;

    let texts = engine.writer().texts();
    assert_eq!(texts.len(), 6);
    let first_baseline = top - 0.5 - 3.0 - line_height + line_height / 4.0;

    let long_lines: Vec<_> = texts.iter().filter(|t| t.x == Pt(10.0)).collect();
    assert_eq!(long_lines.len(), 5);
    assert_eq!(long_lines[4].text, "hier uw stem uit.");
    for (i, line) in long_lines.iter().enumerate() {
        assert_close(line.y, first_baseline - line_height * i as f32);
    }

    let short = texts
        .iter()
        .find(|t| t.text == "Maarten Vandeperre")
        .unwrap();
    assert_close(short.x, column_width + 10.0);
    assert_close(short.y, first_baseline);

    assert_close(engine.cursor().current_y(), top - row_height);
}

#[test]
fn multi_row_tables_are_rejected_before_drawing() {
    let mut engine = LayoutEngine::new(RecordingWriter::new()).unwrap();
    let rows = vec![vec!["a", "b"], vec!["c", "d"]];
    assert!(matches!(
        engine.write_table(&rows),
        Err(PDFError::UnsupportedLayout(_))
    ));

    let none: Vec<Vec<&str>> = Vec::new();
    assert!(matches!(
        engine.write_table(&none),
        Err(PDFError::UnsupportedLayout(_))
    ));

    let empty: [&str; 0] = [];
    assert!(matches!(
        engine.write_table_row(&empty),
        Err(PDFError::UnsupportedLayout(_))
    ));

    // only the first page was begun, nothing else
    assert_eq!(engine.writer().ops.len(), 1);
    assert!(engine.cursor().at_page_top());
}

#[test]
fn single_row_table_matches_write_table_row() {
    let mut table = LayoutEngine::new(RecordingWriter::new()).unwrap();
    table
        .write_table(&[vec!["x".to_string(), "y".to_string()]])
        .unwrap();

    let mut row = LayoutEngine::new(RecordingWriter::new()).unwrap();
    row.write_table_row(&["x", "y"]).unwrap();

    assert_eq!(table.writer().ops, row.writer().ops);
}

#[test]
fn rows_move_to_a_new_page_when_they_do_not_fit() {
    let style = StyleContextBuilder::create().line_height(Pt(100.0)).build();
    let mut engine = LayoutEngine::with_config(
        RecordingWriter::new(),
        PageSetup::default(),
        style,
        FontTable::default(),
    )
    .unwrap();

    // rows are 102pt tall: 8 fit on the first page
    for i in 0..9 {
        engine.write_table_row(&[format!("row {i}")]).unwrap();
    }
    assert_eq!(engine.writer().page_breaks(), 1);

    let texts = engine.writer().texts();
    assert!(texts[..8].iter().all(|t| t.page == 1));
    assert_eq!(texts[8].page, 2);
    let baseline = A4_HEIGHT - 1.0 - 100.0 + 25.0;
    assert_close(texts[8].y, baseline);
    assert_close(engine.cursor().current_y(), A4_HEIGHT - 102.0);
}
