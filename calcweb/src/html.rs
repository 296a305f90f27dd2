//! HTML content helpers for the calcweb UI.
//!
//! Exports the `home` and `result` page builders. Keep all markup here so
//! the handlers in `server` stay free of HTML strings; there is no runtime
//! template dependency.
//!

/// Generate the home page with the greeting and the add form
///
/// # Arguments
/// * `name` - Display name rendered in the greeting
pub fn home(name: &str) -> String {
    format!(
        "<html>
        <head>
            <title>Calc Hub</title>
            <meta name='viewport' content='width=device-width, initial-scale=1'>
        </head>
        <body style='background:#1a1a1a;color:#e0e0e0;text-align:center;padding:50px;font-family:Segoe UI,Tahoma,sans-serif;'>
            <h2 style='color:#00ff41;font-family:monospace;'>Hello {name}!</h2>
            <p>Enter two numbers to get their sum:</p>
            <form action='/add' method='POST'>
                <input type='number' name='num1' placeholder='First number' required style='padding:12px;margin:10px;border-radius:6px;border:1px solid #333;background:#252525;color:white;'>
                <input type='number' name='num2' placeholder='Second number' required style='padding:12px;margin:10px;border-radius:6px;border:1px solid #333;background:#252525;color:white;'>
                <br><button type='submit' style='padding:12px 30px;background:#007bff;border:none;color:white;border-radius:6px;cursor:pointer;font-weight:bold;margin-top:10px;'>Add</button>
            </form>
        </body>
        </html>"
    )
}

/// Generate the result page with the computed sum
///
/// # Arguments
/// * `ans` - Sum of the two submitted numbers
pub fn result(ans: i64) -> String {
    format!(
        "<html>
        <head>
            <title>Calc Hub</title>
            <meta name='viewport' content='width=device-width, initial-scale=1'>
        </head>
        <body style='background:#1a1a1a;color:#e0e0e0;text-align:center;padding:50px;font-family:Segoe UI,Tahoma,sans-serif;'>
            <h2 style='color:#00ff41;font-family:monospace;'>Result</h2>
            <p>The sum is <code style='font-size:1.4rem;color:#00ff41;'>{ans}</code></p>
            <br><a href='/' style='color:#007bff;'>Back</a>
        </body>
        </html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that the home page carries the greeting and the add form
    #[test]
    fn home_renders_name_and_form() {
        let page = home("Krupakar");
        assert!(page.contains("Hello Krupakar!"));
        assert!(page.contains("action='/add'"));
        assert!(page.contains("name='num1'"));
        assert!(page.contains("name='num2'"));
    }

    /// Test that the result page renders the sum, sign included
    #[test]
    fn result_renders_sum() {
        let page = result(6);
        assert!(page.contains(">6</code>"));

        let page = result(-42);
        assert!(page.contains(">-42</code>"));
    }
}
