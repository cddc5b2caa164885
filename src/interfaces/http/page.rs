use crate::domain::point::Shape;

const SHAPE_PLACEHOLDER: &str = "__INITIAL_SHAPE__";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Affine transforms</title>
  <style>
    body { font-family: sans-serif; margin: 1.5rem; }
    canvas { border: 1px solid #ccc; width: 600px; height: 400px; }
    fieldset { display: inline-block; margin: 0.5rem 0.5rem 0 0; vertical-align: top; }
    input { width: 4rem; }
  </style>
</head>
<body>
  <canvas id="canvas" width="600" height="400"></canvas>
  <div>
    <fieldset>
      <legend>Translate</legend>
      dx <input id="dx" type="number" value="20">
      dy <input id="dy" type="number" value="20">
      <button data-op="translate">Apply</button>
    </fieldset>
    <fieldset>
      <legend>Rotate</legend>
      angle <input id="angle" type="number" value="15">
      cx <input id="cxr" type="number" value="250">
      cy <input id="cyr" type="number" value="180">
      <button data-op="rotate">Apply</button>
    </fieldset>
    <fieldset>
      <legend>Scale</legend>
      kx <input id="kx" type="number" step="0.1" value="1.2">
      ky <input id="ky" type="number" step="0.1" value="1.2">
      cx <input id="cxs" type="number" value="250">
      cy <input id="cys" type="number" value="180">
      <button data-op="scale">Apply</button>
    </fieldset>
    <button id="reset">Reset</button>
  </div>
  <script>
    const INITIAL_SHAPE = __INITIAL_SHAPE__;
    let shape = INITIAL_SHAPE.map(p => p.slice());
    const canvas = document.getElementById('canvas');
    const ctx = canvas.getContext('2d');

    function drawGrid() {
      ctx.strokeStyle = '#e0e0e0';
      ctx.lineWidth = 0.5;
      for (let x = 0; x < canvas.width; x += 50) {
        ctx.beginPath(); ctx.moveTo(x, 0); ctx.lineTo(x, canvas.height); ctx.stroke();
      }
      for (let y = 0; y < canvas.height; y += 50) {
        ctx.beginPath(); ctx.moveTo(0, y); ctx.lineTo(canvas.width, y); ctx.stroke();
      }
    }

    function draw() {
      ctx.clearRect(0, 0, canvas.width, canvas.height);
      drawGrid();
      ctx.beginPath();
      shape.forEach(([x, y], i) => i === 0 ? ctx.moveTo(x, y) : ctx.lineTo(x, y));
      ctx.closePath();
      ctx.strokeStyle = '#3a86ff';
      ctx.lineWidth = 3;
      ctx.stroke();
      ctx.fillStyle = 'rgba(58, 134, 255, 0.1)';
      ctx.fill();
      shape.forEach(([x, y]) => {
        ctx.beginPath();
        ctx.arc(x, y, 4, 0, Math.PI * 2);
        ctx.fillStyle = '#ffbe0b';
        ctx.fill();
        ctx.strokeStyle = '#333';
        ctx.lineWidth = 1;
        ctx.stroke();
      });
    }

    const num = id => +document.getElementById(id).value;
    const PARAMS = {
      translate: () => ({ dx: num('dx'), dy: num('dy') }),
      rotate: () => ({ angle: num('angle'), cx: num('cxr'), cy: num('cyr') }),
      scale: () => ({ kx: num('kx'), ky: num('ky'), cx: num('cxs'), cy: num('cys') }),
    };

    async function transform(op) {
      const buttons = document.querySelectorAll('button');
      buttons.forEach(b => b.disabled = true);
      try {
        const resp = await fetch('/api/transform', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ op, params: PARAMS[op](), shape }),
        });
        if (!resp.ok) throw new Error('request failed with status ' + resp.status);
        shape = (await resp.json()).shape;
        draw();
      } catch (err) {
        alert('Transform failed: ' + err.message);
      } finally {
        buttons.forEach(b => b.disabled = false);
      }
    }

    document.querySelectorAll('button[data-op]').forEach(btn =>
      btn.addEventListener('click', () => transform(btn.dataset.op)));
    document.getElementById('reset').addEventListener('click', () => {
      shape = INITIAL_SHAPE.map(p => p.slice());
      draw();
    });
    draw();
  </script>
</body>
</html>
"#;

/// Formats a shape as a JS array literal. Whole coordinates print without a
/// fractional part, e.g. `[[50,200],[150,80]]`.
pub fn shape_literal(shape: &Shape) -> String {
    let points: Vec<String> = shape
        .iter()
        .map(|p| format!("[{},{}]", p.x, p.y))
        .collect();
    format!("[{}]", points.join(","))
}

/// Renders the index page with `shape` as the initial polygon.
pub fn render_index(shape: &Shape) -> String {
    PAGE_TEMPLATE.replace(SHAPE_PLACEHOLDER, &shape_literal(shape))
}
