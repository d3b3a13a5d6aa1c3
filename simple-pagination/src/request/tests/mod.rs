mod url_decode;
