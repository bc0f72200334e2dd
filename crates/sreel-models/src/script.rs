//! The built-in five-act narrative script.
//!
//! Scene content is fixed for the session; only the generation status
//! fields on each [`Scene`] change at runtime.

use crate::scene::Scene;

/// Build the full script as a fresh set of idle scenes.
pub fn default_script() -> Vec<Scene> {
    vec![
        Scene::new(
            1u32,
            "Babak 1: Dunia yang Terbalik",
            "Bilik Nobita → Dunia Alternatif",
            "Langit berkilau, bangunan terapung, sekolah sihir. Telefon jadi kristal, bas jadi naga terbang.",
            "Nobita: “Doraemon, aku harap dunia ini penuh sihir… bukan teknologi yang menyusahkan.”\nDoraemon: “Baiklah, mari kita ubah realiti dengan ‘Penukar Dimensi’!”",
            "Dunia berubah sepenuhnya dari teknologi modern menjadi dunia sihir fantasi.",
        ),
        Scene::new(
            2u32,
            "Babak 2: Akademi Sihir",
            "Sekolah Sihir",
            "Pelajar terbang di atas sapu, latihan sihir dengan tongkat sihir, makhluk pelindung mitos (Phoenix, Elf, Naga Air) berkeliaran.",
            "Gian: “Aku nak jadi ahli sihir paling kuat!”\nShizuka: “Sihir bukan untuk berlagak, tapi untuk membantu.”",
            "Nobita dan teman-temannya belajar sihir asas di akademi sihir, bertemu dengan makhluk penjaga yang agung.",
        ),
        Scene::new(
            3u32,
            "Babak 3: Ancaman Dunia Bawah",
            "Hutan Larangan → Gerbang Dunia Bawah",
            "Hutan diselimuti kabus gelap, makhluk bayangan dengan mata merah menyala muncul, portal berapi yang berdenyut terbuka.",
            "Suneo: “Apa benda tu… ia bergerak dalam bayang!”\nDoraemon: “Itu makhluk dari dunia bawah. Kita perlu tutup portal sebelum terlambat!”",
            "Makhluk ghaib yang menakutkan menyerang kampung sihir saat portal ke dunia bawah mulai terbuka.",
        ),
        Scene::new(
            4u32,
            "Babak 4: Pertarungan Terakhir",
            "Gerbang Dunia Bawah",
            "Ledakan sihir berwarna-warni, perisai cahaya pelindung yang berkilauan, air mata jatuh dari mata Doraemon.",
            "Nobita: “Kita tak boleh lari. Kita mesti lawan bersama!”\nDoraemon: “Gunakan sihir hati – gabungkan kekuatan persahabatan!”",
            "Nobita dan teman-temannya menggabungkan kekuatan sihir mereka, menciptakan perisai pelindung yang kuat. Doraemon dengan berat hati mengorbankan alat terakhirnya untuk menutup portal selamanya.",
        ),
        Scene::new(
            5u32,
            "Babak 5: Kembali dan Kenangan",
            "Dunia asal",
            "Bilik Nobita yang familiar, cahaya matahari pagi yang hangat masuk melalui jendela, semua teman tersenyum dengan rasa lega dan kedewasaan baru.",
            "Nobita: “Dunia sihir itu… akan kekal dalam hati kita.”\nDoraemon: “Kadang-kadang, keajaiban datang dari dalam diri.”",
            "Mereka kembali ke dunia asal, lebih matang dan menghargai kehidupan normal mereka, membawa kenangan petualangan sihir mereka.",
        ),
    ]
}
