use super::registry::{BlockComment, CommentSyntax, Language};

const C_QUOTES: &[char] = &['"', '\''];

fn c_style() -> CommentSyntax {
    CommentSyntax::new(vec!["//"], vec![("/*", "*/")]).with_quotes(C_QUOTES)
}

fn hash_style() -> CommentSyntax {
    CommentSyntax::new(vec!["#"], vec![]).with_quotes(C_QUOTES)
}

fn sql_style() -> CommentSyntax {
    CommentSyntax::new(vec!["--"], vec![("/*", "*/")])
        .with_quotes(&['\''])
        .without_escape()
}

fn markup_style() -> CommentSyntax {
    CommentSyntax::new(vec![], vec![("<!--", "-->")])
}

/// Languages known out of the box.
pub(super) fn builtin_languages() -> Vec<Language> {
    let mut languages = c_family();
    languages.extend(scripting());
    languages.extend(data_and_markup());
    languages.extend(legacy());
    languages
}

fn c_family() -> Vec<Language> {
    vec![
        Language::new("C", vec!["c"], c_style()),
        Language::new("C Header", vec!["h"], c_style()),
        Language::new("C++", vec!["cpp", "cc", "cxx", "c++"], c_style()),
        Language::new(
            "C++ Header",
            vec!["hh", "hpp", "hxx", "h++", "ipp"],
            c_style(),
        ),
        Language::new("C#", vec!["cs"], c_style()),
        Language::new("Objective-C", vec!["m"], c_style()),
        Language::new("Java", vec!["java", "jav"], c_style()),
        Language::new("Kotlin", vec!["kt", "kts"], c_style().with_nesting()),
        Language::new("Scala", vec!["scala"], c_style().with_nesting()),
        Language::new("Swift", vec!["swift"], c_style().with_nesting()),
        Language::new(
            "Go",
            vec!["go"],
            c_style().with_multi_line_quotes(&['`']),
        ),
        Language::new(
            "Rust",
            vec!["rs"],
            CommentSyntax::new(vec!["//"], vec![("/*", "*/")])
                .with_nesting()
                .with_multi_line_quotes(&['"']),
        ),
        Language::new(
            "JavaScript",
            vec!["js", "jsx", "mjs", "cjs", "jsp", "jspx", "jspf"],
            c_style().with_multi_line_quotes(&['`']),
        ),
        Language::new(
            "TypeScript",
            vec!["ts", "tsx", "mts", "cts"],
            c_style().with_multi_line_quotes(&['`']),
        ),
        Language::new("ActionScript", vec!["as"], c_style()),
        Language::new("Apex", vec!["cls", "trigger"], c_style()),
        Language::new("CSS", vec!["css"], c_style()),
        Language::new("SCSS", vec!["scss"], c_style()),
    ]
}

fn scripting() -> Vec<Language> {
    vec![
        Language::new(
            "Python",
            vec!["py", "pyi", "python"],
            CommentSyntax::new(vec!["#"], vec![("\"\"\"", "\"\"\""), ("'''", "'''")])
                .with_quotes(C_QUOTES),
        ),
        Language::new(
            "Ruby",
            vec!["rb"],
            CommentSyntax::with_blocks(
                vec!["#"],
                vec![BlockComment::new("=begin", "=end").at_line_start()],
            )
            .with_quotes(C_QUOTES),
        ),
        Language::new(
            "PHP",
            vec!["php", "php3", "php4", "php5", "phtml", "inc"],
            CommentSyntax::new(vec!["//", "#"], vec![("/*", "*/")]).with_quotes(C_QUOTES),
        ),
        Language::new("Shell", vec!["sh", "bash", "zsh"], hash_style()),
        Language::new("Dockerfile", vec!["dockerfile"], hash_style())
            .with_file_names(vec!["Dockerfile"]),
        Language::new(
            "Terraform",
            vec!["tf", "tfvars"],
            CommentSyntax::new(vec!["#", "//"], vec![("/*", "*/")]).with_quotes(&['"']),
        ),
        Language::new(
            "Visual Basic .NET",
            vec!["vb"],
            CommentSyntax::new(vec!["'"], vec![])
                .with_quotes(&['"'])
                .without_escape(),
        ),
    ]
}

fn data_and_markup() -> Vec<Language> {
    vec![
        Language::new("SQL", vec!["sql"], sql_style()),
        Language::new("T-SQL", vec!["tsql"], sql_style()),
        Language::new("Oracle PL/SQL", vec!["pkb", "pks"], sql_style()),
        Language::new("YAML", vec!["yaml", "yml"], hash_style()),
        Language::new(
            "HTML",
            vec![
                "html", "htm", "cshtml", "vbhtml", "aspx", "ascx", "rhtml", "erb", "shtml",
                "shtm", "cmp",
            ],
            markup_style(),
        ),
        Language::new("XML", vec!["xml", "xsd", "xsl"], markup_style()),
        Language::new("XHTML", vec!["xhtml"], markup_style()),
        Language::new("Vue", vec!["vue"], markup_style()),
    ]
}

fn legacy() -> Vec<Language> {
    vec![
        Language::new(
            "ABAP",
            vec!["abap", "ab4", "flow"],
            CommentSyntax::new(vec!["\""], vec![("/*", "*/")])
                .with_quotes(&['\''])
                .without_escape(),
        ),
        Language::new(
            "COBOL",
            vec!["cbl", "ccp", "cob", "cobol", "cpy"],
            CommentSyntax::new(vec!["*>"], vec![])
                .with_quotes(C_QUOTES)
                .without_escape(),
        ),
        Language::new(
            "PL/I",
            vec!["pl1"],
            CommentSyntax::new(vec!["--"], vec![("/*", "*/")])
                .with_quotes(&['\''])
                .without_escape(),
        ),
        Language::new("RPG", vec!["rpg"], CommentSyntax::new(vec!["//"], vec![])),
        Language::new("JCL", vec!["jcl"], CommentSyntax::new(vec!["//*"], vec![])),
    ]
}
