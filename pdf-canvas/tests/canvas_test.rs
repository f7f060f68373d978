use pdf_canvas::{Color, Font, PdfCanvas};

fn finish_to_string(canvas: PdfCanvas<Vec<u8>>) -> String {
    String::from_utf8_lossy(&canvas.finish().unwrap()).into_owned()
}

#[test]
fn text_uses_selected_font_and_color() {
    let mut canvas = PdfCanvas::new(Vec::new());
    canvas.set_font(Font::HelveticaBold, 24.0);
    canvas.set_text_color(Color::from_rgb8(25, 25, 25));
    canvas.cell("Invoice");
    let out = finish_to_string(canvas);
    assert!(out.contains("/F2 24 Tf"));
    assert!(out.contains("(Invoice) Tj"));
    // 25/255 rounds to 0.098 at four decimals.
    assert!(out.contains("0.098 0.098 0.098 rg"));
}

#[test]
fn text_y_is_flipped_to_pdf_coordinates() {
    let mut canvas = PdfCanvas::new(Vec::new());
    canvas.set_font(Font::Helvetica, 10.0);
    canvas.set_y(800.0);
    canvas.cell("footer");
    let out = finish_to_string(canvas);
    // 841.89 - 800 - 10, rounded to four decimals on output.
    assert!(out.contains("40 31.89 Td"));
}

#[test]
fn line_emits_stroke_ops() {
    let mut canvas = PdfCanvas::new(Vec::new());
    canvas.set_stroke_color(Color::from_rgb8(225, 225, 225));
    canvas.line(40.0, 200.0, 100.0, 200.0);
    let out = finish_to_string(canvas);
    assert!(out.contains("RG"));
    assert!(out.contains("40 641.89 m 100 641.89 l S"));
}

#[test]
fn escaped_parens_survive_round_trip() {
    let mut canvas = PdfCanvas::new(Vec::new());
    canvas.cell("Consulting (remote)");
    let out = finish_to_string(canvas);
    assert!(out.contains("(Consulting \\(remote\\)) Tj"));
}

#[test]
fn info_entries_land_in_the_trailer_dict() {
    let mut canvas = PdfCanvas::new(Vec::new());
    canvas.set_info("Title", "Invoice 0001");
    canvas.set_info("Creator", "invoice-render");
    canvas.cell("x");
    let out = finish_to_string(canvas);
    assert!(out.contains("/Title (Invoice 0001)"));
    assert!(out.contains("/Creator (invoice-render)"));
    assert!(out.contains("/Info"));
}

#[test]
fn compression_hides_plaintext_content() {
    let mut plain = PdfCanvas::new(Vec::new());
    plain.cell("FINDME");
    let plain_out = finish_to_string(plain);
    assert!(plain_out.contains("FINDME"));

    let mut packed = PdfCanvas::new(Vec::new());
    packed.set_compression(true);
    packed.cell("FINDME");
    let packed_out = finish_to_string(packed);
    assert!(!packed_out.contains("FINDME"));
    assert!(packed_out.contains("/Filter /FlateDecode"));
}

#[test]
fn document_structure_is_complete() {
    let mut canvas = PdfCanvas::new(Vec::new());
    canvas.cell("body");
    let out = finish_to_string(canvas);
    for needle in [
        "%PDF-1.7",
        "/Type /Catalog",
        "/Type /Pages",
        "/Type /Page",
        "/MediaBox [0 0 595.28 841.89]",
        "/BaseFont /Helvetica",
        "/BaseFont /Helvetica-Bold",
        "xref",
        "trailer",
        "startxref",
        "%%EOF",
    ] {
        assert!(out.contains(needle), "missing {:?}", needle);
    }
}
