// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_article(sections: usize) -> String {
    let mut content = String::from(
        "---\ntitle: \"Benchmark Article\"\ndate: \"2026-01-01\"\n---\n\n# Benchmark Article\n\n",
    );

    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str(
            "Founders often **underprice** their product. This paragraph has *emphasis*,\n\
             some `inline code` and a ***strong point*** spread over two lines.\n\n",
        );
        for i in 0..3 {
            content.push_str(&format!("- Bullet {i} with **bold** text\n"));
        }
        content.push('\n');
        for i in 1..=3 {
            content.push_str(&format!("{i}. Step {i}\n"));
        }
        content.push_str("\n> A quote to close the section.\n\n---\n\n");
    }

    content
}
