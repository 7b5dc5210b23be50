//! HTML page rendering
//!
//! Renders a [`Layout`] to a single self-contained page. Charts are drawn
//! client-side with Plotly; control changes travel over the `/ws` socket and
//! fall back to `POST /api/v1/update` when the socket is unavailable.

use std::fmt::{self, Write};

use super::layout::{Component, Layout};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Rendering options
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Log every message exchanged with the server to the browser console
    pub debug: bool,
}

/// Render the full dashboard page
pub fn render_page(layout: &Layout, options: &PageOptions) -> Result<String, fmt::Error> {
    let mut body = String::new();
    for component in &layout.components {
        render_component(&mut body, component)?;
    }

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{plotly}"></script>
<style>{style}</style>
</head>
<body>
{body}<script>
window.LAUNCHBOARD_DEBUG = {debug};
{script}
</script>
</body>
</html>
"#,
        title = escape(&layout.title),
        plotly = PLOTLY_CDN,
        style = STYLE,
        body = body,
        debug = options.debug,
        script = SCRIPT,
    ))
}

fn render_component(out: &mut String, component: &Component) -> fmt::Result {
    match component {
        Component::Heading {
            text,
            color,
            font_size_px,
        } => writeln!(
            out,
            r#"<h1 style="text-align:center;color:{};font-size:{}px">{}</h1>"#,
            escape(color),
            font_size_px,
            escape(text)
        ),
        Component::Dropdown {
            id,
            options,
            value,
            placeholder,
            searchable,
        } => {
            out.push_str("<div class=\"dropdown\">\n");
            if *searchable {
                writeln!(
                    out,
                    r#"<input type="search" class="dropdown-search" data-for="{id}" placeholder="{}">"#,
                    escape(placeholder)
                )?;
            }
            writeln!(out, r#"<select id="{id}" class="control" data-control="{id}">"#)?;
            for option in options {
                let selected = if &option.value == value { " selected" } else { "" };
                writeln!(
                    out,
                    r#"<option value="{}"{selected}>{}</option>"#,
                    escape(&option.value),
                    escape(&option.label)
                )?;
            }
            out.push_str("</select>\n</div>\n");
            Ok(())
        }
        Component::Graph { id } => writeln!(out, r#"<div id="{id}" class="graph"></div>"#),
        Component::Paragraph { text } => writeln!(out, "<p>{}</p>", escape(text)),
        Component::RangeSlider {
            id,
            min,
            max,
            step,
            marks,
            value,
        } => {
            let mark_values = marks
                .keys()
                .map(|k| k.to_string())
                .collect::<Vec<_>>()
                .join(",");
            writeln!(
                out,
                r#"<div id="{id}" class="range-slider control" data-control="{id}" data-min="{min}" data-max="{max}" data-step="{step}" data-marks="{mark_values}">"#
            )?;
            // Valid stops are step multiples plus the marks; the page script snaps
            for (handle, v) in ["low", "high"].iter().zip(value.iter()) {
                writeln!(
                    out,
                    r#"<input type="range" class="{handle}" min="{min}" max="{max}" step="any" value="{v}">"#
                )?;
            }
            out.push_str(r#"<div class="marks">"#);
            for label in marks.values() {
                write!(out, "<span>{}</span>", escape(label))?;
            }
            out.push_str("</div>\n<div class=\"range-value\"></div>\n</div>\n");
            Ok(())
        }
        Component::Break => writeln!(out, "<br>"),
    }
}

/// Minimal HTML escaping for text and attribute values
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0 2em; }
.dropdown select, .dropdown input { width: 100%; padding: 6px; margin: 2px 0; box-sizing: border-box; }
.range-slider { position: relative; height: 3em; }
.range-slider input[type=range] { position: absolute; left: 0; width: 100%; pointer-events: none; background: none; }
.range-slider input[type=range]::-webkit-slider-thumb { pointer-events: all; }
.range-slider input[type=range]::-moz-range-thumb { pointer-events: all; }
.range-slider .marks { position: absolute; top: 1.6em; width: 100%; display: flex; justify-content: space-between; font-size: 0.8em; }
.range-slider .range-value { position: absolute; top: 2.6em; width: 100%; text-align: center; font-size: 0.8em; }
.graph { min-height: 450px; }
"#;

const SCRIPT: &str = r#"
(function () {
  const log = (...args) => { if (window.LAUNCHBOARD_DEBUG) console.debug('[launchboard]', ...args); };

  function siteValue() { return document.getElementById('site-dropdown').value; }

  function sliderValue() {
    const slider = document.getElementById('payload-slider');
    return [Number(slider.querySelector('.low').value), Number(slider.querySelector('.high').value)];
  }

  function showFigure(output, figure) {
    Plotly.react(output, figure.data, figure.layout);
  }

  function applyUpdates(updates) {
    for (const update of updates) {
      if (update.figure) {
        showFigure(update.output, update.figure);
      } else {
        // keep the previous chart on failure
        console.warn('callback failed for', update.output, update.error);
      }
    }
  }

  let socket = null;
  let socketReady = false;

  function sendHttp(trigger) {
    const body = { trigger: trigger, inputs: { site: siteValue(), payload: sliderValue() } };
    log('POST /api/v1/update', body);
    fetch('/api/v1/update', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(body),
    })
      .then((r) => r.json())
      .then((res) => {
        if (res.updates) applyUpdates(res.updates);
        else console.warn('update rejected', res);
      })
      .catch((e) => console.warn('update failed', e));
  }

  function controlChanged(control, value) {
    if (socketReady) {
      const msg = { type: 'control_changed', control: control, value: value };
      log('send', msg);
      socket.send(JSON.stringify(msg));
    } else {
      sendHttp(control);
    }
  }

  function connect() {
    const scheme = location.protocol === 'https:' ? 'wss' : 'ws';
    socket = new WebSocket(scheme + '://' + location.host + '/ws');
    socket.onopen = () => {
      socketReady = true;
      socket.send(JSON.stringify({ type: 'init' }));
    };
    socket.onmessage = (event) => {
      const msg = JSON.parse(event.data);
      log('recv', msg);
      switch (msg.type) {
        case 'figure':
          showFigure(msg.output, msg.figure);
          break;
        case 'callback_error':
          console.warn('callback failed', msg.output, msg.message);
          break;
        case 'error':
          console.warn('server error', msg.message);
          break;
      }
    };
    socket.onclose = () => { socketReady = false; };
    socket.onerror = () => {
      if (!socketReady) sendHttp(null);
      socketReady = false;
    };
  }

  function setupSlider() {
    const slider = document.getElementById('payload-slider');
    const low = slider.querySelector('.low');
    const high = slider.querySelector('.high');
    const label = slider.querySelector('.range-value');
    const min = Number(slider.dataset.min);
    const max = Number(slider.dataset.max);
    const step = Number(slider.dataset.step);
    const marks = slider.dataset.marks.split(',').filter((m) => m !== '').map(Number);
    const snap = (input) => {
      const v = Number(input.value);
      const k = Math.floor((v - min) / step);
      const stops = marks.concat([min + k * step, min + (k + 1) * step])
        .filter((s) => s >= min && s <= max);
      let best = stops[0];
      for (const s of stops) {
        if (Math.abs(s - v) < Math.abs(best - v)) best = s;
      }
      input.value = best;
    };
    const render = () => { label.textContent = low.value + ' - ' + high.value + ' kg'; };
    const onInput = (moved) => {
      snap(moved);
      if (Number(low.value) > Number(high.value)) {
        if (moved === low) low.value = high.value; else high.value = low.value;
      }
      render();
    };
    low.addEventListener('input', () => onInput(low));
    high.addEventListener('input', () => onInput(high));
    low.addEventListener('change', () => controlChanged('payload-slider', sliderValue()));
    high.addEventListener('change', () => controlChanged('payload-slider', sliderValue()));
    render();
  }

  function setupDropdown() {
    const select = document.getElementById('site-dropdown');
    select.addEventListener('change', () => controlChanged('site-dropdown', select.value));
    const search = document.querySelector('.dropdown-search[data-for="site-dropdown"]');
    if (search) {
      search.addEventListener('input', () => {
        const term = search.value.toLowerCase();
        for (const opt of select.options) {
          opt.hidden = term !== '' && !opt.text.toLowerCase().includes(term);
        }
      });
    }
  }

  setupDropdown();
  setupSlider();
  if ('WebSocket' in window) connect(); else sendHttp(null);
})();
"#;
