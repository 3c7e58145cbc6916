//! The built-in rule tables.
//!
//! Order matters: the first rule whose trigger appears in the input wins, and
//! the more specific triggers sit above the general ones. `"undefined"` is
//! deliberately kept above `"is not defined"`.

/// A literal trigger and the explanation it unlocks.
///
/// Triggers are matched against lower-cased input, so they must themselves
/// be lower-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub trigger: &'static str,
    pub meaning: &'static str,
    pub fix: &'static str,
}

pub const FALLBACK_MEANING: &str =
    "I couldn't fully recognize this error, but it usually means something is wrong in your code.";
pub const FALLBACK_FIX: &str =
    "Check the console line number and review the code around that part.";

pub static RULES: [Rule; 13] = [
    Rule {
        trigger: "cannot read properties of null",
        meaning: "Your JavaScript is trying to use an element that does not exist in your HTML.",
        fix: "Make sure the element ID/class is correct, and your script runs after the HTML loads.",
    },
    Rule {
        trigger: "undefined",
        meaning: "Your code is trying to use a variable or function that has no value yet.",
        fix: "Check spelling and make sure the variable is declared before using it.",
    },
    Rule {
        trigger: "is not defined",
        meaning: "JavaScript does not know what that variable/function is.",
        fix: "Declare the variable or check if you typed the name correctly.",
    },
    Rule {
        trigger: "unexpected token",
        meaning: "Your code has a syntax error (something typed wrong like extra comma, missing bracket, etc).",
        fix: "Check the line number and look for missing quotes, commas, or brackets.",
    },
    Rule {
        trigger: "missing ) after argument list",
        meaning: "You forgot to close a bracket ')' in a function call.",
        fix: "Check your parentheses and make sure every '(' has a matching ')'.",
    },
    Rule {
        trigger: "failed to fetch",
        meaning: "Your code tried to request data from an API or link, but it failed.",
        fix: "Check your internet, API URL, and ensure CORS or server is working.",
    },
    Rule {
        trigger: "net::err",
        meaning: "Your browser failed to load a file or resource (image, script, API, etc).",
        fix: "Check the file path or link. Make sure the resource exists.",
    },
    Rule {
        trigger: "uncaught typeerror",
        meaning: "Your code is using something incorrectly (wrong data type or missing element).",
        fix: "Check the console line number and see what variable is causing the problem.",
    },
    Rule {
        trigger: "maximum call stack size exceeded",
        meaning: "Your code is running a function infinitely (loop recursion).",
        fix: "Check if your function calls itself repeatedly without stopping.",
    },
    Rule {
        trigger: "illegal invocation",
        meaning: "You called a function in the wrong way or wrong object context.",
        fix: "Make sure you're calling the function correctly (ex: document.method()).",
    },
    Rule {
        trigger: "cors",
        meaning: "Your browser blocked an API request because of security rules (CORS policy).",
        fix: "Try using a proper backend, use correct headers, or use an API that allows requests.",
    },
    Rule {
        trigger: "404",
        meaning: "The file or page you're trying to access does not exist.",
        fix: "Check the file path, spelling, and folder structure.",
    },
    Rule {
        trigger: "500",
        meaning: "The server has an internal error. This is usually not your frontend fault.",
        fix: "Try again later or check the backend server logs.",
    },
];

/// A trigger for the idle-typing tip line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub trigger: &'static str,
    pub text: &'static str,
}

pub const FALLBACK_TIP: &str = "💡 Tip: Always check the line number shown in your browser console.";

pub static TIPS: [Tip; 3] = [
    Tip {
        trigger: "null",
        text: "💡 Tip: Check if your element exists in HTML before selecting it in JavaScript.",
    },
    Tip {
        trigger: "undefined",
        text: "💡 Tip: Print your variables using console.log() to see their values.",
    },
    Tip {
        trigger: "syntax",
        text: "💡 Tip: Syntax errors are often caused by missing brackets or quotes.",
    },
];
