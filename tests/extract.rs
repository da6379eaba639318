// tests/extract.rs
//
// Worksheet fragment extraction without the network.
//
use kaspi_track::DatasetKind;
use kaspi_track::specs::{items, progress, routes};

fn table(dataset: DatasetKind, rows: &str) -> String {
    format!(r#"<table id="{}">{rows}</table>"#, dataset.worksheet_id())
}

#[test]
fn progress_header_plus_two_rows() {
    let html = table(
        DatasetKind::Progress,
        "<tr><th>a</th><th>b</th><th>c</th><th>d</th></tr>\
         <tr><td>t1</td><td>first</td><td>c1</td><td>x1</td></tr>\
         <tr><td>t2</td><td>second</td><td>c2</td><td>x2</td></tr>",
    );
    let rows = progress::extract(Some(&html));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].description, "first");
    assert_eq!(rows[1].description, "second");
}

#[test]
fn items_three_rows_trimmed() {
    let html = table(
        DatasetKind::Items,
        "<tr><td> text1 </td></tr><tr><td>\ttext2\n</td></tr><tr><td>text3</td></tr>",
    );
    assert_eq!(items::extract(Some(&html)), vec!["text1", "text2", "text3"]);
}

#[test]
fn absent_or_empty_fragments_are_empty() {
    for raw in [None, Some(""), Some("<html></html>")] {
        assert!(progress::extract(raw).is_empty());
        assert!(routes::extract(raw).is_empty());
        assert!(items::extract(raw).is_empty());
    }
}

#[test]
fn length_tracks_rows_with_cells() {
    for n in 0..12 {
        let mut rows = String::new();
        for i in 0..n {
            if i % 3 == 0 {
                rows.push_str("<tr><th>header</th></tr>");
            }
            rows.push_str(&format!(
                "<tr><td>r{i}</td><td>t</td><td>d{i}</td><td>c</td><td>at</td></tr>"
            ));
        }
        let got = routes::extract(Some(&table(DatasetKind::Routes, &rows)));
        assert_eq!(got.len(), n);
        for (i, entry) in got.iter().enumerate() {
            assert_eq!(entry.route, format!("r{i}"));
            assert_eq!(entry.description, format!("d{i}"));
        }
    }
}

#[test]
fn nested_markup_in_cells() {
    let html = table(
        DatasetKind::Progress,
        r##"<tr><td><span class="dt">10.01</span></td><td><b>Принят</b> <i>на складе</i></td>
           <td><a href="#">Иван</a></td><td>Алматы</td></tr>"##,
    );
    let rows = progress::extract(Some(&html));
    assert_eq!(rows[0].description, "Принят на складе");
    assert_eq!(rows[0].courier, "Иван");
}
