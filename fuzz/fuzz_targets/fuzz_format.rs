#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let blocks = caretext_core::format(text);
        // The formatter is total and never drops or merges a paragraph.
        assert_eq!(blocks.len(), text.split("\n\n").count());
        for block in &blocks {
            let html = block.to_html();
            assert!(html.starts_with("<p"));
            assert!(html.ends_with("</p>"));
        }
    }
});
