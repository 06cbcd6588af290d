//! Indonesian translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Kalkulator Biaya Listrik".into());
    t.insert("app.subtitle".into(), "Hitung biaya listrik Anda dengan mudah!".into());
    t.insert("app.goodbye".into(), "Sampai jumpa!".into());

    // Menu
    t.insert("menu.prompt".into(), "[a] tambah perangkat  [l] hasil  [c] hapus semua  [t] tarif  [q] keluar".into());
    t.insert("menu.unknown".into(), "Pilihan tidak dikenal: {}".into());

    // Tariff
    t.insert("tariff.header".into(), "Tarif Listrik".into());
    t.insert("tariff.category".into(), "Pilih kategori tarif PLN Anda".into());
    t.insert("tariff.rate".into(), "Tarif: {} {} per kWh".into());
    t.insert("tariff.custom".into(), "Atau masukkan tarif khusus per kWh".into());
    t.insert("tariff.custom_active".into(), "Menggunakan tarif khusus".into());

    // Device form
    t.insert("form.header".into(), "Detail Perangkat".into());
    t.insert("form.name".into(), "Nama Perangkat (contoh: AC Ruang Tamu)".into());
    t.insert("form.appliance".into(), "Pilih perangkat dari daftar (nomor atau nama, kosongkan jika tidak ada)".into());
    t.insert("form.catalog_power".into(), "Daya: {} watt".into());
    t.insert("form.manual_power".into(), "Sesuaikan daya (watt)".into());
    t.insert("form.voltage".into(), "Masukkan tegangan (Volt)".into());
    t.insert("form.current".into(), "Masukkan arus (Ampere)".into());
    t.insert("form.computed_power".into(), "Daya terhitung dari V x A: {} watt".into());
    t.insert("form.usage_header".into(), "Pola Penggunaan".into());
    t.insert("form.usage".into(), "Berapa lama perangkat digunakan? [1] 24 jam  [2] beberapa jam per hari  [3] kustom".into());
    t.insert("form.usage_all_day".into(), "Perangkat akan dihitung untuk penggunaan 24 jam".into());
    t.insert("form.hours_slider".into(), "Jam per hari (0-24)".into());
    t.insert("form.hours_custom".into(), "Masukkan jam per hari".into());
    t.insert("form.period".into(), "Periode perhitungan: [1] 1 hari  [2] 1 minggu  [3] 1 bulan  [4] kustom".into());
    t.insert("form.days".into(), "Jumlah hari".into());
    t.insert("form.not_a_number".into(), "Mohon masukkan angka".into());
    t.insert("form.added".into(), "Perangkat berhasil ditambahkan!".into());

    // Validation errors
    t.insert("error.missing_name".into(), "Mohon masukkan nama perangkat!".into());
    t.insert("error.conflicting_input".into(), "Ambil salah satu antara hitung daya ampere atau masukkan daya sendiri!".into());
    t.insert("error.invalid_power".into(), "Daya perangkat harus lebih dari 0 watt!".into());
    t.insert("error.invalid_hours".into(), "Jam per hari harus antara 0 dan 24!".into());
    t.insert("error.invalid_days".into(), "Periode minimal 1 hari!".into());
    t.insert("error.invalid_rate".into(), "Tarif harus lebih dari 0 dan paling banyak 10000!".into());
    t.insert("error.unknown_appliance".into(), "Perangkat tidak ada di daftar!".into());

    // Results
    t.insert("results.header".into(), "Hasil Perhitungan".into());
    t.insert("results.empty".into(), "Belum ada perangkat yang ditambahkan. Tambahkan dengan [a].".into());
    t.insert("results.cleared".into(), "Semua perangkat dihapus".into());
    t.insert("summary.total_energy".into(), "Total Konsumsi Listrik".into());
    t.insert("summary.total_cost".into(), "Total Biaya".into());
    t.insert("summary.devices".into(), "{} perangkat".into());
    t.insert("summary.per_day".into(), "{}/hari".into());

    // Table
    t.insert("table.name".into(), "Nama".into());
    t.insert("table.power".into(), "Daya".into());
    t.insert("table.energy".into(), "KWH".into());
    t.insert("table.cost".into(), "Biaya".into());
    t.insert("table.hours".into(), "Jam per hari".into());
    t.insert("table.days".into(), "Hari".into());

    // Units
    t.insert("unit.hours".into(), "jam".into());
    t.insert("unit.days".into(), "hari".into());

    // Charts
    t.insert("chart.cost".into(), "Grafik Biaya".into());
    t.insert("chart.energy".into(), "Grafik Konsumsi".into());

    // Saving tips
    t.insert("tips.header".into(), "Tips Hemat Energi:".into());
    t.insert("tips.1".into(), "Gunakan perangkat hemat energi (Energy Star)".into());
    t.insert("tips.2".into(), "Matikan perangkat saat tidak digunakan".into());
    t.insert("tips.3".into(), "Manfaatkan cahaya alami di siang hari".into());
    t.insert("tips.4".into(), "Atur suhu AC pada 24-26 C".into());
    t.insert("tips.5".into(), "Gunakan timer untuk perangkat yang tidak perlu menyala 24 jam".into());

    t
}
