//! Grammar lookup and per-language built-in names.

use tree_sitter::Language;

use crate::SyntaxError;

/// Canonical ids of the languages with a grammar.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "rust",
    "javascript",
    "python",
    "json",
    "c",
    "cpp",
    "go",
    "java",
    "csharp",
    "bash",
    "css",
    "html",
    "markdown",
];

/// Resolves a language id (or common alias) to its canonical id and grammar.
pub(crate) fn get_language(lang: &str) -> Result<(&'static str, Language), SyntaxError> {
    let resolved: (&'static str, Language) = match lang {
        "rust" | "rs" => ("rust", tree_sitter_rust::LANGUAGE.into()),
        "javascript" | "js" | "jsx" => ("javascript", tree_sitter_javascript::LANGUAGE.into()),
        "python" | "py" => ("python", tree_sitter_python::LANGUAGE.into()),
        "json" => ("json", tree_sitter_json::LANGUAGE.into()),
        "c" | "h" => ("c", tree_sitter_c::LANGUAGE.into()),
        "cpp" | "c++" | "cc" | "cxx" | "hpp" => ("cpp", tree_sitter_cpp::LANGUAGE.into()),
        "go" | "golang" => ("go", tree_sitter_go::LANGUAGE.into()),
        "java" => ("java", tree_sitter_java::LANGUAGE.into()),
        "csharp" | "cs" | "c#" => ("csharp", tree_sitter_c_sharp::LANGUAGE.into()),
        "bash" | "sh" | "shell" => ("bash", tree_sitter_bash::LANGUAGE.into()),
        "css" => ("css", tree_sitter_css::LANGUAGE.into()),
        "html" | "htm" => ("html", tree_sitter_html::LANGUAGE.into()),
        "markdown" | "md" => ("markdown", tree_sitter_md::LANGUAGE.into()),
        _ => return Err(SyntaxError::UnknownLanguage(lang.to_string())),
    };
    Ok(resolved)
}

/// Identifiers shown as functions even where they are not called.
pub(crate) fn builtins(lang: &str) -> &'static [&'static str] {
    match lang {
        "rust" => &[
            "Some", "None", "Ok", "Err", "Box", "Vec", "String", "Option", "Result", "drop",
        ],
        "python" => &[
            "print", "len", "range", "open", "str", "int", "float", "bool", "list", "dict",
            "set", "tuple", "type", "isinstance", "enumerate", "zip", "map", "filter", "sorted",
            "super", "input",
        ],
        "javascript" => &[
            "console", "require", "parseInt", "parseFloat", "setTimeout", "setInterval",
            "Promise", "Array", "Object", "JSON", "Math",
        ],
        "c" => &[
            "printf", "scanf", "malloc", "calloc", "realloc", "free", "strlen", "memcpy",
            "memset", "exit",
        ],
        "cpp" => &[
            "std", "cout", "cin", "cerr", "endl", "printf", "malloc", "free", "move",
        ],
        "go" => &[
            "len", "cap", "make", "new", "append", "copy", "delete", "close", "panic",
            "recover", "print", "println",
        ],
        "java" => &["System", "String", "Math", "Integer", "Object", "List", "Map"],
        "csharp" => &["Console", "Math", "String", "List", "Dictionary", "Task"],
        "bash" => &[
            "echo", "cd", "printf", "read", "exit", "export", "source", "test", "set", "unset",
        ],
        _ => &[],
    }
}
