//! Captured-shape tracking pages for offline tests.

pub const TRACKING_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <div class="container">
    <h3>Status:
      <strong>Delivered</strong>
    </h3>
    <table class="table">
      <tr><th>Sender</th><td> Example Shop </td></tr>
      <tr><th>Order number</th><td>A-1001</td></tr>
      <tr><th>Cash on delivery</th><td>No</td></tr>
      <tr><th>Pickup point</th><td>Praha 1, Národní 10</td></tr>
    </table>
    <table class="table">
      <tr><th>2024-01-01 08:00:00</th><td> Accepted </td></tr>
      <tr><th>2024-01-01 09:30:00</th><td>Out for delivery</td></tr>
    </table>
  </div>
</body>
</html>
"#;

pub const TRACKING_PAGE_CS: &str = r#"<!DOCTYPE html>
<html>
<body>
  <h3>Stav:
    <strong>Doručeno</strong>
  </h3>
  <table class="table">
    <tr><th>Odesílatel</th><td>Example Shop</td></tr>
  </table>
  <table class="table">
    <thead><tr><th>Datum</th></tr></thead>
    <tr><th>03. 01. 2024 10:15:00</th><td>Doručeno.</td></tr>
    <tr><th>02. 01. 2024
        14:30:59</th><td>Připravena k vyzvednutí.</td></tr>
  </table>
</body>
</html>
"#;

pub const INVALID_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <div class="alert alert-danger">Invalid tracking number</div>
  <h3>Status:
    <strong>Unknown</strong>
  </h3>
</body>
</html>
"#;
