use axum::response::{Html, IntoResponse};

// Serve the single-page UI for the QR code generator
pub async fn serve_index() -> impl IntoResponse {
    let html = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>QR Code Generator</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, 'Open Sans', 'Helvetica Neue', sans-serif;
            max-width: 480px;
            margin: 0 auto;
            padding: 20px;
            color: #333;
        }
        header {
            text-align: center;
            margin-bottom: 32px;
        }
        header .icon {
            display: inline-flex;
            background-color: #eee;
            padding: 16px;
            border-radius: 50%;
            margin-bottom: 12px;
        }
        h1 {
            color: #2c3e50;
            margin: 0;
        }
        header p {
            color: #666;
        }
        .card {
            border: 1px solid #ddd;
            border-radius: 8px;
            padding: 24px;
            box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
        }
        form {
            display: flex;
            gap: 10px;
        }
        #url-input {
            flex-grow: 1;
            padding: 10px 14px;
            border: 1px solid #ccc;
            border-radius: 4px;
            font-size: 16px;
        }
        .button {
            background-color: #7c3aed;
            color: white;
            border: none;
            padding: 10px 18px;
            border-radius: 4px;
            cursor: pointer;
            font-size: 16px;
        }
        .button:hover {
            background-color: #6d28d9;
        }
        .button:disabled {
            background-color: #b4a0e5;
            cursor: not-allowed;
        }
        #error {
            color: #e74c3c;
            font-size: 14px;
            text-align: center;
            margin-top: 12px;
        }
        #result {
            display: none;
            text-align: center;
            margin-top: 24px;
        }
        #qr-image {
            width: 256px;
            height: 256px;
            border-radius: 8px;
        }
        #download-link {
            display: inline-block;
            margin-top: 16px;
            color: #7c3aed;
            font-weight: 500;
        }
        footer {
            text-align: center;
            margin-top: 48px;
            font-size: 14px;
            color: #888;
        }
    </style>
</head>
<body>
    <header>
        <div class="icon">
            <svg width="40" height="40" viewBox="0 0 24 24" fill="none" stroke="#7c3aed" stroke-width="2">
                <rect x="3" y="3" width="7" height="7"/>
                <rect x="14" y="3" width="7" height="7"/>
                <rect x="3" y="14" width="7" height="7"/>
                <path d="M14 14h3v3h-3zM18 18h3v3h-3z"/>
            </svg>
        </div>
        <h1>QR Code Generator</h1>
        <p>Enter any URL to instantly create your QR code.</p>
    </header>

    <main>
        <div class="card">
            <form id="generate-form" novalidate>
                <input type="url" id="url-input" placeholder="e.g., https://www.google.com"
                       aria-label="URL to generate QR code for">
                <button type="submit" class="button" id="generate-btn">Generate QR</button>
            </form>
            <p id="error"></p>
            <div id="result">
                <img id="qr-image" alt="Generated QR Code">
                <div>
                    <a id="download-link" download="qrcode.png">Download PNG</a>
                </div>
            </div>
        </div>
    </main>

    <footer>
        <p>Powered by Rust &amp; Axum</p>
    </footer>

    <script>
        const form = document.getElementById('generate-form');
        const input = document.getElementById('url-input');
        const button = document.getElementById('generate-btn');
        const errorEl = document.getElementById('error');
        const resultEl = document.getElementById('result');
        const imageEl = document.getElementById('qr-image');
        const downloadEl = document.getElementById('download-link');

        form.addEventListener('submit', async (e) => {
            e.preventDefault();

            // The button is inert while a request is in flight; the server
            // additionally rejects overlapping submissions.
            if (button.disabled) return;

            errorEl.textContent = '';
            resultEl.style.display = 'none';
            button.disabled = true;
            button.textContent = 'Generating...';

            try {
                const response = await fetch('/api/generate', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ url: input.value }),
                });
                const data = await response.json();

                if (response.ok) {
                    imageEl.src = data.data_uri;
                    downloadEl.href = data.data_uri;
                    downloadEl.download = data.filename;
                    resultEl.style.display = 'block';
                } else {
                    errorEl.textContent = data.error;
                }
            } catch (err) {
                console.error(err);
                errorEl.textContent = 'Failed to generate QR code. Please try again.';
            } finally {
                button.disabled = false;
                button.textContent = 'Generate QR';
            }
        });
    </script>
</body>
</html>"##;

    Html(html)
}
