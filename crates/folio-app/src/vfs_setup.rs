use folio_vfs::TreeNode;

/// 2024-01-15 09:30:00 UTC; demo timestamps count forward from here.
const EPOCH: u64 = 1_705_311_000;
const DAY: u64 = 86_400;

/// Demo base tree: a small portfolio site.
pub fn demo_tree() -> TreeNode {
    let at = |days: u64| EPOCH + days * DAY;

    TreeNode::folder(
        "",
        vec![
            TreeNode::file(
                "about.md",
                "# About\n\nHi, I'm a developer who likes small tools and fast builds.\n\
                 Type 'help' to see what this terminal can do.",
            )
            .with_times(at(0), at(30)),
            TreeNode::file(
                "contact.txt",
                "email: hello@example.com\ngithub: example",
            )
            .with_times(at(0), at(0)),
            TreeNode::folder(
                "projects",
                vec![
                    TreeNode::folder(
                        "terminal",
                        vec![
                            TreeNode::file(
                                "README.md",
                                "# terminal\n\nA command interpreter over a virtual filesystem.",
                            )
                            .with_times(at(3), at(12)),
                            TreeNode::file("main.rs", "fn main() {\n    println!(\"hello\");\n}")
                                .with_times(at(3), at(12)),
                        ],
                    ),
                    TreeNode::folder(
                        "website",
                        vec![
                            TreeNode::file("index.html", "<h1>Portfolio</h1>")
                                .with_times(at(5), at(20)),
                            TreeNode::file("app.js", "document.title = 'Portfolio';")
                                .with_times(at(5), at(21)),
                            TreeNode::file("style.css", "body { font-family: monospace; }")
                                .with_times(at(5), at(19)),
                        ],
                    ),
                ],
            ),
            TreeNode::folder(
                "blog",
                vec![
                    TreeNode::file(
                        "2024-02-arenas.md",
                        "# Arenas\n\nIndices instead of pointers keep trees simple.",
                    )
                    .with_times(at(17), at(17)),
                    TreeNode::file(
                        "2024-03-overlays.md",
                        "# Overlays\n\nA read-only base plus a writable layer on top.",
                    )
                    .with_times(at(45), at(46)),
                ],
            ),
            TreeNode::folder(
                "media",
                vec![
                    TreeNode::file("avatar.png", "")
                        .with_size(24_576)
                        .with_times(at(1), at(1)),
                    TreeNode::file("talk.mp4", "")
                        .with_size(52_428_800)
                        .with_times(at(60), at(60)),
                ],
            ),
            TreeNode::folder("tmp", Vec::new()),
        ],
    )
}
