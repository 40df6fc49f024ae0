//! Verification email content

use ev_core::domain::entities::verification_code::CODE_TTL_MINUTES;

/// Subject line for verification emails
pub fn subject() -> &'static str {
    "Your verification code"
}

/// HTML body with the code rendered prominently.
pub fn html_body(code: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <style>
      body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
      .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
      .code {{ background: #fff; border: 2px dashed #667eea; padding: 15px; text-align: center; font-size: 32px; font-weight: bold; letter-spacing: 5px; margin: 20px 0; color: #667eea; }}
      .footer {{ text-align: center; margin-top: 30px; font-size: 12px; color: #666; }}
    </style>
  </head>
  <body>
    <div class="container">
      <h2>Confirm your email address</h2>
      <p>Enter the following code to finish creating your account:</p>
      <div class="code">{code}</div>
      <p>The code expires in <strong>{ttl} minutes</strong>.</p>
      <p>Never share this code with anyone. If you did not request it, you can safely ignore this email.</p>
      <div class="footer">
        <p>This message was sent automatically; please do not reply.</p>
      </div>
    </div>
  </body>
</html>"#,
        code = code,
        ttl = CODE_TTL_MINUTES,
    )
}
